//! SQLite-backed catalog implementation.

mod connection;
mod repo_impl;


use crate::store::Vocabulary;
use rusqlite::Connection;

/// SQLite-backed entry catalog.
///
/// Owns the database connection for the process lifetime together with the
/// loaded vocabulary, which is the closed set of categories the catalog
/// accepts. There is no global state: callers construct one of these at
/// startup and pass it down.
pub struct SqliteCatalog {
    pub(crate) conn: Connection,
    pub(crate) vocabulary: Vocabulary,
}

impl SqliteCatalog {
    /// Returns the vocabulary this catalog was opened with.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
