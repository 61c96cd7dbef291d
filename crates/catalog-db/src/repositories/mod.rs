//! Store implementations.
//!
//! SQL, file layout and serialization details are confined to this module
//! and never exposed through the port trait signatures.

mod fs_image_store;
mod json_item_repository;
mod row_mappers;
mod sqlite_item_repository;

pub use fs_image_store::FsImageStore;
pub use json_item_repository::JsonItemRepository;
pub use sqlite_item_repository::SqliteItemRepository;
