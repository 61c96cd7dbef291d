//! `CatalogCore` - the primary application facade.
//!
//! Adapters (CLI, Web) receive a `CatalogCore` instance and use it to
//! access all functionality.

use crate::ports::Stores;

use super::{ImageService, ItemService};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete stores.
///
/// # Example
///
/// ```ignore
/// let stores = StoreFactory::build_stores(&config).await?;
/// let core = CatalogCore::new(stores);
///
/// let items = core.items().list().await?;
/// ```
pub struct CatalogCore {
    items: ItemService,
    images: ImageService,
}

impl CatalogCore {
    /// Create a new `CatalogCore` from the given stores.
    pub fn new(stores: Stores) -> Self {
        Self {
            items: ItemService::new(stores.items, stores.images.clone()),
            images: ImageService::new(stores.images),
        }
    }

    /// Access the item service.
    pub const fn items(&self) -> &ItemService {
        &self.items
    }

    /// Access the image service.
    pub const fn images(&self) -> &ImageService {
        &self.images
    }
}
