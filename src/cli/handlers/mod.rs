//! Command handlers for the CLI.

mod init;
mod list;
mod new;
mod show;
mod tags;


use anyhow::{Context, Result};
use std::path::Path;

use crate::store::{SqliteCatalog, Vocabulary};

pub use init::handle_init;
pub use list::handle_list;
pub use new::handle_new;
pub use show::handle_show;
pub use tags::handle_tags;

// Re-export for tests
#[cfg(test)]
pub(crate) use new::parse_tag_args;
#[cfg(test)]
pub(crate) use show::format_entry;

// ===========================================
// Shared Utilities
// ===========================================

/// Loads the vocabulary and opens the catalog database.
///
/// Every command except `completions` starts here; failure to open the
/// database aborts the command.
pub(crate) fn open_catalog(db_path: &Path, meta_path: &Path) -> Result<SqliteCatalog> {
    let vocabulary = Vocabulary::load(meta_path)
        .with_context(|| format!("failed to load metadata from {}", meta_path.display()))?;

    SqliteCatalog::open(db_path, vocabulary)
        .with_context(|| format!("failed to open database at {}", db_path.display()))
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
