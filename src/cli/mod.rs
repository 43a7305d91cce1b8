//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// shelf - catalogue titled entries with categorised tags
#[derive(Parser, Debug)]
#[command(name = "shelf", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub database: Option<PathBuf>,

    /// Metadata file defining categories and tags (overrides config file)
    #[arg(short = 'm', long, global = true)]
    pub metadata: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the metadata file and create the database schema
    Init,

    /// Create a new entry, optionally applying tags
    New(NewArgs),

    /// Show an entry by exact title
    Show(ShowArgs),

    /// List entries, optionally filtered by title, body, and tags
    #[command(name = "ls")]
    List(ListArgs),

    /// List the categories and their tag vocabulary
    Tags(TagsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Entry title
    #[arg(short, long)]
    pub title: String,

    /// Entry body text
    #[arg(short, long)]
    pub body: String,

    /// Tag to apply, as CATEGORY=NAME (repeatable)
    #[arg(long = "tag", value_name = "CATEGORY=NAME")]
    pub tags: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Exact title of the entry to show
    pub title: String,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Title substring to match (case-insensitive)
    #[arg(long)]
    pub title: Option<String>,

    /// Body substring to match (case-insensitive)
    #[arg(long)]
    pub body: Option<String>,

    /// Tag name to filter by; matches in any category (repeatable)
    #[arg(long = "tag", value_name = "NAME")]
    pub tags: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct TagsArgs {
    /// Only show this category
    #[arg(long)]
    pub category: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
