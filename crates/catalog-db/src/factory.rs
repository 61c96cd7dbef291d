//! Composition utilities for building `Stores` from a `CatalogConfig`.
//!
//! Construction only; no domain logic lives here.

use std::sync::Arc;

use catalog_core::{CatalogConfig, ImageStore, ItemRepository, StorageBackend, Stores};

use crate::repositories::{FsImageStore, JsonItemRepository, SqliteItemRepository};
use crate::setup::setup_database;

/// Factory for the item and image stores named by a configuration.
pub struct StoreFactory;

impl StoreFactory {
    /// Open (creating if needed) the item store selected by `config.backend`.
    pub async fn item_repository(config: &CatalogConfig) -> anyhow::Result<Arc<dyn ItemRepository>> {
        let repo: Arc<dyn ItemRepository> = match config.backend {
            StorageBackend::Json => {
                let repo = JsonItemRepository::new(&config.items_file);
                repo.ensure_file().await?;
                Arc::new(repo)
            }
            StorageBackend::Sqlite => {
                let pool = setup_database(&config.database_path).await?;
                Arc::new(SqliteItemRepository::new(pool))
            }
        };

        tracing::info!(
            target: "catalog.store",
            backend = %config.backend,
            path = %config.item_store_path().display(),
            "Opened item store"
        );
        Ok(repo)
    }

    /// Create the image store, making sure its directory exists.
    pub fn image_store(config: &CatalogConfig) -> anyhow::Result<Arc<dyn ImageStore>> {
        let store = FsImageStore::new(&config.images_dir);
        store.ensure_dir()?;
        Ok(Arc::new(store))
    }

    /// Build both stores.
    ///
    /// This is the recommended way for adapters to obtain a `Stores` value
    /// for `CatalogCore::new`.
    pub async fn build_stores(config: &CatalogConfig) -> anyhow::Result<Stores> {
        let items = Self::item_repository(config).await?;
        let images = Self::image_store(config)?;
        Ok(Stores::new(items, images))
    }
}
