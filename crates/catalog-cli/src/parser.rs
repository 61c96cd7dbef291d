//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use catalog_core::StorageBackend;

use crate::commands::Commands;

/// Command-line interface for the item catalog.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Serve and manage a small item catalog")]
#[command(version)]
pub struct Cli {
    /// Item store backend: json or sqlite
    #[arg(long, env = "CATALOG_BACKEND", default_value = "json", global = true)]
    pub backend: StorageBackend,

    /// Directory holding items.json, catalog.db and images/ (defaults to $CATALOG_DATA_DIR, then the current directory)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
