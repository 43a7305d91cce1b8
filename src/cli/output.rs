//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single entry in listing output.
#[derive(Debug, Serialize)]
pub struct EntryListing {
    pub id: i64,
    pub title: String,
}

/// A category with its tag vocabulary.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub category: String,
    pub tags: Vec<String>,
}
