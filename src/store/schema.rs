//! SQLite schema creation for the catalog.

use crate::store::Vocabulary;
use rusqlite::Connection;

/// Creates the catalog schema for the given vocabulary.
///
/// Idempotent: every statement is `CREATE TABLE IF NOT EXISTS`. Creates the
/// `entries` table plus, for each category, a tag vocabulary table and an
/// entry↔tag association table named by the category's fixed suffixes.
///
/// Category names are validated identifiers (see [`crate::domain::Category`]),
/// which is what makes splicing the derived table names into these statements
/// safe.
pub fn create_schema(conn: &Connection, vocabulary: &Vocabulary) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL
        );",
    )?;

    for category in vocabulary.categories() {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {tag_table} (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE
            );",
            tag_table = category.tag_table(),
        ))?;

        // The composite primary key makes tag application idempotent:
        // re-associating an existing pair is an ignored conflict.
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {map_table} (
                entry_id INTEGER NOT NULL REFERENCES entries(id) ON DELETE CASCADE,
                tag_id INTEGER NOT NULL REFERENCES {tag_table}(id) ON DELETE CASCADE,
                PRIMARY KEY (entry_id, tag_id)
            );",
            map_table = category.map_table(),
            tag_table = category.tag_table(),
        ))?;
    }

    Ok(())
}

/// Returns true if the entries table exists in the database.
///
/// Used at startup to distinguish a freshly created database from one that
/// predates the catalog.
pub fn schema_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'entries'",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
