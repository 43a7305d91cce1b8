//! CatalogRepository trait and result types.

use crate::domain::{Category, Entry, EntryDraft, EntryId, TagId, TagName};
use crate::store::Filter;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur in the catalog data layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested file or row does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The metadata file is malformed.
    #[error("malformed metadata: {0}")]
    Format(String),

    /// Required user input is missing or invalid.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A read or write against the database failed.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for catalog operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// EntryField Type
// ===========================================

/// The closed set of columns in the entries table.
///
/// Field lookups go through this enum rather than raw column names, so the
/// only strings ever spliced into a statement come from a fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Id,
    Title,
    Body,
}

impl EntryField {
    /// All entry columns, in table order.
    pub const ALL: [EntryField; 3] = [EntryField::Id, EntryField::Title, EntryField::Body];

    /// Returns the SQL column name for this field.
    pub fn column(self) -> &'static str {
        match self {
            EntryField::Id => "id",
            EntryField::Title => "title",
            EntryField::Body => "body",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

// ===========================================
// FieldValue Type
// ===========================================

/// A single field fetched from an entry row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Id(EntryId),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Id(id) => write!(f, "{}", id),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

// ===========================================
// TagSelector Type
// ===========================================

/// Identifies a tag within a category, by id or by display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagSelector {
    Id(TagId),
    Name(TagName),
}

impl From<TagId> for TagSelector {
    fn from(id: TagId) -> Self {
        TagSelector::Id(id)
    }
}

impl From<TagName> for TagSelector {
    fn from(name: TagName) -> Self {
        TagSelector::Name(name)
    }
}

// ===========================================
// CatalogRepository Trait
// ===========================================

/// Repository trait for the entry catalog.
///
/// This is the contract consumed by the UI layer: entry creation and lookup,
/// tag resolution and association, and filtered counting/listing. The SQLite
/// implementation lives in [`crate::store::SqliteCatalog`].
pub trait CatalogRepository {
    /// Inserts a new entry and returns its assigned id.
    fn create_entry(&mut self, draft: &EntryDraft) -> StoreResult<EntryId>;

    /// Finds an entry by exact title.
    ///
    /// Titles are not unique; when duplicates exist the entry with the lowest
    /// id is returned. Returns `None` if no entry matches.
    fn find_by_title(&self, title: &str) -> StoreResult<Option<Entry>>;

    /// Looks up a tag by name in a category's vocabulary table, inserting it
    /// on first use. Resolving the same name again returns the same id.
    fn resolve_or_create_tag(&mut self, category: &Category, name: &TagName)
    -> StoreResult<TagId>;

    /// Records an entry↔tag association. Idempotent: associating the same
    /// pair twice leaves a single association row.
    fn associate(&mut self, entry: EntryId, category: &Category, tag: TagId) -> StoreResult<()>;

    /// Returns the ids of all entries associated with a tag in a category.
    ///
    /// A name that does not resolve yields the empty set, not an error.
    fn entries_for_tag(
        &self,
        category: &Category,
        tag: TagSelector,
    ) -> StoreResult<HashSet<EntryId>>;

    /// Applies a category→tag-names dictionary to an entry, creating missing
    /// tags as needed.
    fn apply_tags(
        &mut self,
        entry: EntryId,
        tags: &BTreeMap<Category, Vec<TagName>>,
    ) -> StoreResult<()>;

    /// Counts entries matching a filter.
    fn count_entries(&self, filter: &Filter) -> StoreResult<u64>;

    /// Fetches a single field by positional row index under a filter.
    ///
    /// Rows are ordered by ascending id, so the same index always names the
    /// same row for a given filter. Returns `None` when the index is past the
    /// end of the result set.
    fn fetch_field(&self, field: EntryField, row: u64, filter: &Filter)
    -> StoreResult<Option<FieldValue>>;

    /// Lists all entries matching a filter, ordered by ascending id.
    fn list_entries(&self, filter: &Filter) -> StoreResult<Vec<Entry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // StoreError
    // ===========================================

    #[test]
    fn not_found_displays_subject() {
        let err = StoreError::NotFound("metadata file 'meta.json'".to_string());
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("meta.json"));
    }

    #[test]
    fn format_error_displays_reason() {
        let err = StoreError::Format("'categories' must be an object".to_string());
        assert!(err.to_string().contains("malformed metadata"));
    }

    #[test]
    fn validation_error_displays_reason() {
        let err = StoreError::Validation("unknown category 'Publisher'".to_string());
        assert!(err.to_string().contains("Publisher"));
    }

    #[test]
    fn store_error_implements_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<StoreError>();
    }

    // ===========================================
    // EntryField
    // ===========================================

    #[test]
    fn field_columns_match_schema() {
        assert_eq!(EntryField::Id.column(), "id");
        assert_eq!(EntryField::Title.column(), "title");
        assert_eq!(EntryField::Body.column(), "body");
    }

    #[test]
    fn all_lists_every_column_once() {
        let columns: Vec<_> = EntryField::ALL.iter().map(|f| f.column()).collect();
        assert_eq!(columns, vec!["id", "title", "body"]);
    }

    // ===========================================
    // FieldValue & TagSelector
    // ===========================================

    #[test]
    fn field_value_display() {
        assert_eq!(FieldValue::Id(EntryId::new(4)).to_string(), "4");
        assert_eq!(FieldValue::Text("hello".to_string()).to_string(), "hello");
    }

    #[test]
    fn tag_selector_from_id_and_name() {
        assert_eq!(TagSelector::from(TagId::new(1)), TagSelector::Id(TagId::new(1)));
        let name = TagName::new("horror").unwrap();
        assert_eq!(
            TagSelector::from(name.clone()),
            TagSelector::Name(name)
        );
    }
}
