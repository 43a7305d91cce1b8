//! New entry command handler.

use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::path::Path;

use super::open_catalog;
use crate::cli::NewArgs;
use crate::domain::{Category, EntryDraft, TagName};
use crate::store::CatalogRepository;

/// Parses repeated `--tag CATEGORY=NAME` arguments into a category→names map.
pub fn parse_tag_args(args: &[String]) -> Result<BTreeMap<Category, Vec<TagName>>> {
    let mut tags: BTreeMap<Category, Vec<TagName>> = BTreeMap::new();

    for arg in args {
        let Some((category_str, name_str)) = arg.split_once('=') else {
            bail!("invalid tag '{}': expected CATEGORY=NAME", arg);
        };

        let category = Category::new(category_str)
            .with_context(|| format!("invalid category in tag '{}'", arg))?;
        let name =
            TagName::new(name_str).with_context(|| format!("invalid tag name in '{}'", arg))?;

        tags.entry(category).or_default().push(name);
    }

    Ok(tags)
}

pub fn handle_new(args: &NewArgs, db_path: &Path, meta_path: &Path) -> Result<()> {
    let draft = EntryDraft::new(&args.title, &args.body)
        .map_err(|e| anyhow::anyhow!("nothing entered for title or text body: {}", e))?;
    let tags = parse_tag_args(&args.tags)?;

    let mut catalog = open_catalog(db_path, meta_path)?;

    // Reject unknown categories before touching the entries table, so a bad
    // --tag cannot leave behind a half-created, untagged entry.
    for category in tags.keys() {
        if !catalog.vocabulary().contains(category) {
            bail!("unknown category '{}' in --tag", category);
        }
    }

    let id = catalog
        .create_entry(&draft)
        .with_context(|| "failed to create entry")?;

    catalog
        .apply_tags(id, &tags)
        .with_context(|| format!("failed to apply tags to entry {}", id))?;

    let tag_count: usize = tags.values().map(Vec::len).sum();
    println!("Created entry {} with {} tag(s)", id, tag_count);

    Ok(())
}
