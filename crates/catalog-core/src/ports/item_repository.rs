//! Item repository trait definition.
//!
//! This port defines the interface for catalog persistence.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::Item;

/// Repository for catalog items.
///
/// # Design Rules
///
/// - Append-only: items are never updated or removed
/// - Enumeration order is insertion order
/// - Ordinal lookups are 1-based
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List every item in insertion order.
    async fn list_all(&self) -> Result<Vec<Item>, RepositoryError>;

    /// Get the item at 1-based position `index`.
    ///
    /// Returns `Err(RepositoryError::IndexOutOfRange)` for `index <= 0` or
    /// past the end.
    async fn get_by_index(&self, index: i64) -> Result<Item, RepositoryError>;

    /// Durably append one item.
    async fn append(&self, item: &Item) -> Result<(), RepositoryError>;
}
