//! Storage adapters for the item catalog.
//!
//! - [`JsonItemRepository`] keeps the catalog as one JSON document
//! - [`SqliteItemRepository`] keeps it in `items` + `categories` tables
//! - [`FsImageStore`] keeps content-addressed images in a flat directory
//!
//! [`StoreFactory`] picks the item store named by a [`catalog_core::CatalogConfig`].

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export repository implementations
pub use repositories::{FsImageStore, JsonItemRepository, SqliteItemRepository};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(test)]
pub use setup::setup_test_database;
