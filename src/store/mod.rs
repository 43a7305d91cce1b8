//! The catalog data layer: metadata, schema, filtering, and SQLite storage.

mod filter;
mod meta;
mod repository;
mod schema;
mod sqlite;

pub use filter::{Filter, Predicate, TagBranch};
pub use meta::Vocabulary;
pub use repository::{
    CatalogRepository, EntryField, FieldValue, StoreError, StoreResult, TagSelector,
};
pub use schema::{create_schema, schema_exists};
pub use sqlite::SqliteCatalog;

use std::path::{Path, PathBuf};

/// Appends `ext` to the path unless its file name already ends with it.
///
/// Both the database (`.sqlite`) and metadata (`.json`) paths accept
/// extensionless names.
pub(crate) fn ensure_extension(path: &Path, ext: &str) -> PathBuf {
    let suffix = format!(".{}", ext);
    let has_ext = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(&suffix));

    if has_ext {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }
}
