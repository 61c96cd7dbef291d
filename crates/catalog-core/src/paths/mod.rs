//! Path and configuration resolution for the catalog's on-disk state.
//!
//! Everything the stores need to know about where data lives is resolved
//! once into a [`CatalogConfig`] and injected at construction; there are no
//! process-wide path constants.

mod config;
mod ensure;
mod error;

pub use config::{
    CatalogConfig, DATA_DIR_ENV, DATABASE_FILE, IMAGES_DIR, ITEMS_FILE, StorageBackend, data_root,
};
pub use ensure::ensure_directory;
pub use error::PathError;
