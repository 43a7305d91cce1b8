//! Init command handler.

use anyhow::Result;
use std::path::Path;

use super::open_catalog;
use crate::store::{ensure_extension, schema_exists};

pub fn handle_init(db_path: &Path, meta_path: &Path) -> Result<()> {
    let catalog = open_catalog(db_path, meta_path)?;

    // Report the path actually opened, extension normalization included.
    let db_file = ensure_extension(db_path, "sqlite");

    if !schema_exists(catalog.conn())? {
        anyhow::bail!("schema was not created at {}", db_file.display());
    }

    let categories = catalog.vocabulary().len();
    println!(
        "Initialized catalog at {} with {} categor{}",
        db_file.display(),
        categories,
        if categories == 1 { "y" } else { "ies" }
    );

    Ok(())
}
