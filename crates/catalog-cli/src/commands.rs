//! CLI subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

use catalog_axum::bootstrap::{DEFAULT_FRONT_URL, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT};

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Front-end origin allowed by CORS (repeatable)
        #[arg(long = "front-url", env = "FRONT_URL", default_value = DEFAULT_FRONT_URL, value_delimiter = ',')]
        front_urls: Vec<String>,
        /// Allow any origin, ignoring --front-url
        #[arg(long)]
        cors_allow_all: bool,
        /// Maximum request body size in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
        max_upload_bytes: usize,
    },
    /// List all items in insertion order
    List,
    /// Show the item at a 1-based position
    Show {
        /// Position of the item (1 = first added)
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Add an item, optionally with a .jpg image
    Add {
        /// Item name
        #[arg(long)]
        name: String,
        /// Item category
        #[arg(long)]
        category: String,
        /// Path to a .jpg image file
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Show resolved storage paths
    Paths,
}
