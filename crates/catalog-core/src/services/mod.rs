//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports; they never know which concrete
//! backend they are talking to.

mod catalog_core;
mod image_service;
mod item_service;

pub use catalog_core::CatalogCore;
pub use image_service::ImageService;
pub use item_service::ItemService;
