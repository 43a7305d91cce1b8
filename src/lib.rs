//! shelf - catalogue titled entries with categorised tags in SQLite

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_init, handle_list, handle_new, handle_show, handle_tags},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let db_path = config.database_path(cli.database.as_ref());
    let meta_path = config.metadata_path(cli.metadata.as_ref());

    match &cli.command {
        Command::Init => handle_init(&db_path, &meta_path),
        Command::New(args) => handle_new(args, &db_path, &meta_path),
        Command::Show(args) => handle_show(args, &db_path, &meta_path),
        Command::List(args) => handle_list(args, &db_path, &meta_path),
        Command::Tags(args) => handle_tags(args, &meta_path),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "shelf", &mut std::io::stdout());
            Ok(())
        }
    }
}
