//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem layout leaks beyond the resolved image path
//! - Traits are minimal: append, enumerate, ordinal lookup

pub mod image_store;
pub mod item_repository;

use std::sync::Arc;
use thiserror::Error;

pub use image_store::ImageStore;
pub use item_repository::ItemRepository;

#[cfg(test)]
pub use image_store::MockImageStore;
#[cfg(test)]
pub use item_repository::MockItemRepository;

/// Container for the storage trait objects.
///
/// Lets adapters wire whichever backend they resolved without `CatalogCore`
/// depending on `catalog-db`.
#[derive(Clone)]
pub struct Stores {
    /// Item persistence (JSON document or SQLite).
    pub items: Arc<dyn ItemRepository>,
    /// Content-addressed image blobs.
    pub images: Arc<dyn ImageStore>,
}

impl Stores {
    /// Create a new Stores container.
    pub fn new(items: Arc<dyn ItemRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { items, images }
    }
}

/// Domain-specific errors for item persistence.
///
/// Abstracts away storage implementation details (sqlx errors, io errors,
/// serde errors) behind the three failures callers can act on.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing file or database cannot be opened, read or written.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The persisted content is not valid catalog data.
    #[error("Store corrupt: {0}")]
    Corrupt(String),

    /// Ordinal lookup outside `1..=len`.
    #[error("No item at position {0}")]
    IndexOutOfRange(i64),
}

/// Errors from the image store.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The upload is not a `.jpg` file.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// A requested reference is not a plain `.jpg` file name.
    #[error("{0}")]
    PathInvalid(String),

    /// Reading or writing the image directory failed.
    #[error("Image storage error: {0}")]
    Io(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item store operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Image store operation failed.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
