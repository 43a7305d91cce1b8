//! Validated category names and their derived table names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Suffix for a category's tag vocabulary table.
pub const TAG_TABLE_SUFFIX: &str = "_tags";

/// Suffix for a category's entry-tag association table.
pub const MAP_TABLE_SUFFIX: &str = "_entry_tags";

/// A named grouping of tags, defined in the metadata file.
///
/// Category names derive SQL table names, so they are restricted to a safe
/// identifier subset: ASCII alphanumeric characters and underscores, starting
/// with a letter. This makes the derived names safe to splice into statements
/// without quoting tricks.
///
/// Each category owns two tables:
/// - `<name>_tags` — the tag vocabulary (id, name)
/// - `<name>_entry_tags` — the entry↔tag association junction
///
/// # Examples
///
/// ```
/// use shelf::domain::Category;
///
/// let cat = Category::new("Author").unwrap();
/// assert_eq!(cat.as_str(), "Author");
/// assert_eq!(cat.tag_table(), "Author_tags");
/// assert_eq!(cat.map_table(), "Author_entry_tags");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

/// Error returned when parsing an invalid category name.
#[derive(Debug, Clone)]
pub struct ParseCategoryError(String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl Category {
    /// Creates a new Category from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseCategoryError` if the name is empty, does not start with
    /// an ASCII letter, or contains characters other than ASCII alphanumerics
    /// and underscores.
    pub fn new(s: &str) -> Result<Self, ParseCategoryError> {
        let name = s.trim();

        if name.is_empty() {
            return Err(ParseCategoryError("category name cannot be empty".to_string()));
        }

        let mut chars = name.chars();
        let first = chars.next().unwrap();
        if !first.is_ascii_alphabetic() {
            return Err(ParseCategoryError(format!(
                "invalid category '{}': must start with an ASCII letter",
                name
            )));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ParseCategoryError(format!(
                "invalid category '{}': only ASCII letters, digits, and underscores are allowed",
                name
            )));
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the category name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name of this category's tag vocabulary table.
    pub fn tag_table(&self) -> String {
        format!("{}{}", self.0, TAG_TABLE_SUFFIX)
    }

    /// Returns the name of this category's entry-tag association table.
    pub fn map_table(&self) -> String {
        format!("{}{}", self.0, MAP_TABLE_SUFFIX)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category(\"{}\")", self.0)
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
