//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, etc.).
//!
//! # Structure
//!
//! - `item` - Catalog records (`Item`, `NewItem`, `Category`, `ItemList`)
//! - `image` - Content addressing and image reference rules

mod image;
mod item;

pub use image::{
    DEFAULT_IMAGE, IMAGE_EXTENSION, content_address, ensure_jpg_upload, validate_reference,
};
pub use item::{Category, ImageUpload, Item, ItemList, NewItem};
