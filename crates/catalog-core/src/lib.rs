//! Core domain types, ports and services for the item catalog.
//!
//! This crate knows nothing about SQL, files on disk or HTTP. Storage
//! adapters implement the traits in [`ports`]; adapters (web, CLI) talk to
//! the [`CatalogCore`] facade.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Category, DEFAULT_IMAGE, IMAGE_EXTENSION, ImageUpload, Item, ItemList, NewItem,
    content_address, ensure_jpg_upload, validate_reference,
};
pub use paths::{CatalogConfig, PathError, StorageBackend, ensure_directory};
pub use ports::{CoreError, ImageError, ImageStore, ItemRepository, RepositoryError, Stores};
pub use services::{CatalogCore, ImageService, ItemService};

// Dev-dependency only exercised by integration tests
#[cfg(test)]
use serde_json as _;
