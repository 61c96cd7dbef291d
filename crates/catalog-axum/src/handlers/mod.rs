//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `CatalogCore`.

pub mod images;
pub mod items;
pub mod root;
