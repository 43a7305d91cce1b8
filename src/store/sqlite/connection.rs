//! Connection management for SqliteCatalog.

use super::SqliteCatalog;
use crate::store::{StoreError, StoreResult, Vocabulary, create_schema, ensure_extension};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

impl SqliteCatalog {
    /// Opens an in-memory catalog with the schema for the given vocabulary.
    ///
    /// Useful for tests and throwaway catalogs that don't need persistence.
    pub fn open_in_memory(vocabulary: Vocabulary) -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn, &vocabulary)?;
        Ok(Self { conn, vocabulary })
    }

    /// Opens or creates a catalog database at the given path.
    ///
    /// A missing `.sqlite` extension is appended. Parent directories are
    /// created if needed, and the schema is initialized for any category
    /// tables that do not yet exist.
    pub fn open(path: &Path, vocabulary: Vocabulary) -> StoreResult<Self> {
        let path = ensure_extension(path, "sqlite");

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(&path)?;
        create_schema(&conn, &vocabulary)?;
        Ok(Self { conn, vocabulary })
    }
}
