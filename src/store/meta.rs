//! Metadata file loading: the category→tag vocabulary.
//!
//! The metadata file is a JSON document with a top-level `"categories"` key
//! mapping category names to arrays of tag names:
//!
//! ```json
//! {
//!   "categories": {
//!     "Author": ["Ursula K. Le Guin", "Gene Wolfe"],
//!     "Genre": ["fantasy", "sci-fi"]
//!   }
//! }
//! ```
//!
//! Every category value is validated as an array of strings; a mapping whose
//! values are any other shape is rejected as a whole.

use crate::domain::{Category, TagName};
use crate::store::repository::{StoreError, StoreResult};
use crate::store::ensure_extension;
use serde_json::Value;
use std::path::Path;

/// The loaded category→tag vocabulary.
///
/// Categories keep the order the file presented them in. The vocabulary is
/// the closed set of categories the catalog will accept: data-layer
/// operations reject category names that are not listed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    categories: Vec<(Category, Vec<TagName>)>,
}

impl Vocabulary {
    /// Loads and validates the metadata file at `path`.
    ///
    /// A missing `.json` extension is appended, matching the database-path
    /// convention.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if the file does not exist
    /// - `StoreError::Format` if the document is not valid JSON, lacks a
    ///   `"categories"` object, or any category value is not an array of
    ///   valid tag-name strings
    pub fn load(path: &Path) -> StoreResult<Self> {
        let path = ensure_extension(path, "json");

        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(format!(
                    "metadata file '{}'",
                    path.display()
                )));
            }
            Err(e) => return Err(StoreError::Io { path, source: e }),
        };

        let doc: Value = serde_json::from_str(&contents)
            .map_err(|e| StoreError::Format(format!("invalid JSON: {}", e)))?;

        Self::from_document(&doc)
    }

    /// Validates a parsed metadata document.
    pub fn from_document(doc: &Value) -> StoreResult<Self> {
        let Some(categories) = doc.get("categories") else {
            return Err(StoreError::Format(
                "missing top-level 'categories' key".to_string(),
            ));
        };

        let Some(map) = categories.as_object() else {
            return Err(StoreError::Format(
                "'categories' must be an object mapping category names to tag lists".to_string(),
            ));
        };

        let mut parsed = Vec::with_capacity(map.len());
        for (name, tags_value) in map {
            let category = Category::new(name).map_err(|e| StoreError::Format(e.to_string()))?;

            let Some(items) = tags_value.as_array() else {
                return Err(StoreError::Format(format!(
                    "category '{}': tag list must be an array of strings",
                    category
                )));
            };

            let mut tags = Vec::with_capacity(items.len());
            for item in items {
                let Some(s) = item.as_str() else {
                    return Err(StoreError::Format(format!(
                        "category '{}': tag list must contain only strings",
                        category
                    )));
                };
                let tag = TagName::new(s).map_err(|e| {
                    StoreError::Format(format!("category '{}': {}", category, e))
                })?;
                tags.push(tag);
            }

            parsed.push((category, tags));
        }

        Ok(Self { categories: parsed })
    }

    /// Builds a vocabulary directly from pairs. Intended for tests.
    pub fn from_pairs(pairs: Vec<(Category, Vec<TagName>)>) -> Self {
        Self { categories: pairs }
    }

    /// Returns true when no categories are defined.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Iterates categories with their tag lists, in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[TagName])> {
        self.categories.iter().map(|(c, t)| (c, t.as_slice()))
    }

    /// Iterates the category names, in file order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().map(|(c, _)| c)
    }

    /// Returns true if the category is defined in this vocabulary.
    pub fn contains(&self, category: &Category) -> bool {
        self.categories.iter().any(|(c, _)| c == category)
    }

    /// Returns the tag list for a category, if it is defined.
    pub fn tags_for(&self, category: &Category) -> Option<&[TagName]> {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, t)| t.as_slice())
    }

    /// Returns every category whose vocabulary lists the given tag name.
    ///
    /// Tag names are not scoped to a category at search time: an ambiguous
    /// name resolves against each category that contains it.
    pub fn categories_with_tag(&self, name: &TagName) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|(_, tags)| tags.contains(name))
            .map(|(c, _)| c)
            .collect()
    }
}
