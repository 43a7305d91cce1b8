//! Tags command handler: prints the category vocabulary.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::TagsArgs;
use crate::cli::output::{CategoryListing, Output, OutputFormat};
use crate::domain::Category;
use crate::store::Vocabulary;

pub fn handle_tags(args: &TagsArgs, meta_path: &Path) -> Result<()> {
    let vocabulary = Vocabulary::load(meta_path)
        .with_context(|| format!("failed to load metadata from {}", meta_path.display()))?;

    let selected: Option<Category> = match &args.category {
        Some(name) => Some(
            Category::new(name).with_context(|| format!("invalid category: {}", name))?,
        ),
        None => None,
    };

    let listings: Vec<CategoryListing> = vocabulary
        .iter()
        .filter(|&(category, _)| selected.as_ref().is_none_or(|s| s == category))
        .map(|(category, tags)| CategoryListing {
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
        .collect();

    if let Some(category) = &selected
        && listings.is_empty()
    {
        anyhow::bail!("category '{}' is not defined in the metadata", category);
    }

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No categories defined.");
            }
            for listing in &listings {
                println!("{}:", listing.category);
                for tag in &listing.tags {
                    println!("  {}", tag);
                }
            }
        }
        OutputFormat::Json => {
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
