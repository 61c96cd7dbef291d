//! Item service - orchestrates item submission and lookup.

use std::sync::Arc;

use crate::domain::{Item, NewItem};
use crate::ports::{CoreError, ImageStore, ItemRepository};

/// Service for item operations.
///
/// Validates submissions, persists the image (if any) before the item that
/// references it, and delegates reads to the repository.
pub struct ItemService {
    items: Arc<dyn ItemRepository>,
    images: Arc<dyn ImageStore>,
}

impl ItemService {
    /// Create a new item service.
    pub fn new(items: Arc<dyn ItemRepository>, images: Arc<dyn ImageStore>) -> Self {
        Self { items, images }
    }

    /// Validate and persist a new item. Returns the stored record.
    ///
    /// A failed image write fails the whole submission; the item is only
    /// appended once its image reference exists on disk.
    pub async fn add(&self, new_item: NewItem) -> Result<Item, CoreError> {
        let name = required_field("name", &new_item.name)?;
        let category = required_field("category", &new_item.category)?;

        let image_name = match &new_item.image {
            Some(upload) => Some(self.images.store(&upload.bytes, &upload.filename).await?),
            None => None,
        };

        let item = Item {
            name,
            category,
            image_name,
        };
        self.items.append(&item).await?;

        tracing::info!(
            target: "catalog.items",
            name = %item.name,
            category = %item.category,
            image_name = item.image_name.as_deref().unwrap_or("-"),
            "Receive item"
        );

        Ok(item)
    }

    /// List all items in insertion order.
    pub async fn list(&self) -> Result<Vec<Item>, CoreError> {
        self.items.list_all().await.map_err(CoreError::from)
    }

    /// Get the item at 1-based position `index`.
    pub async fn get(&self, index: i64) -> Result<Item, CoreError> {
        self.items.get_by_index(index).await.map_err(CoreError::from)
    }
}

fn required_field(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}
