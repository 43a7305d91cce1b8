//! List command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_catalog, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{EntryListing, Output, OutputFormat};
use crate::domain::TagName;
use crate::store::{CatalogRepository, Filter};

pub fn handle_list(args: &ListArgs, db_path: &Path, meta_path: &Path) -> Result<()> {
    let catalog = open_catalog(db_path, meta_path)?;

    // 1. Assemble the filter from the search arguments
    let mut filter = Filter::new();
    if let Some(title) = &args.title {
        filter = filter.title_contains(title);
    }
    if let Some(body) = &args.body {
        filter = filter.body_contains(body);
    }
    for tag_str in &args.tags {
        let tag = TagName::new(tag_str).with_context(|| format!("invalid tag: {}", tag_str))?;
        filter = filter.with_tag(tag);
    }

    // 2. Count and fetch under the same predicate
    let count = catalog
        .count_entries(&filter)
        .with_context(|| "failed to count entries")?;
    let entries = catalog
        .list_entries(&filter)
        .with_context(|| "failed to list entries")?;

    // 3. Output based on format
    match args.format {
        OutputFormat::Human => {
            if entries.is_empty() {
                println!("No entries found.");
            } else {
                println!("{:>6}  {:<60}", "ID", "Title");
                println!("{:>6}  {:<60}", "------", "-".repeat(60));
                for entry in &entries {
                    println!(
                        "{:>6}  {:<60}",
                        entry.id(),
                        truncate_str(entry.title(), 60)
                    );
                }
                println!();
                println!("{} entr{}", count, if count == 1 { "y" } else { "ies" });
            }
        }
        OutputFormat::Json => {
            let listings: Vec<EntryListing> = entries
                .iter()
                .map(|e| EntryListing {
                    id: e.id().value(),
                    title: e.title().to_string(),
                })
                .collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
