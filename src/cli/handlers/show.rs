//! Show command handler.

use anyhow::{Result, bail};
use std::path::Path;

use super::open_catalog;
use crate::cli::ShowArgs;
use crate::domain::Entry;
use crate::store::CatalogRepository;

/// Formats an entry for display: the title line, a blank line, then the body.
pub fn format_entry(entry: &Entry) -> String {
    format!("Title: {}\n\n{}", entry.title(), entry.body())
}

pub fn handle_show(args: &ShowArgs, db_path: &Path, meta_path: &Path) -> Result<()> {
    let catalog = open_catalog(db_path, meta_path)?;

    match catalog.find_by_title(&args.title)? {
        Some(entry) => {
            println!("{}", format_entry(&entry));
            Ok(())
        }
        None => bail!("no entry found with title '{}'", args.title),
    }
}
