//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where stores are wired together for the
//! CLI adapter. Command handlers receive the composed `CatalogCore`.

use std::path::Path;

use anyhow::Result;
use catalog_core::{CatalogConfig, CatalogCore, StorageBackend};
use catalog_db::StoreFactory;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Storage locations and backend.
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Resolve storage locations from flags and the environment.
    pub fn resolve(backend: StorageBackend, data_dir: Option<&Path>) -> Result<Self> {
        Ok(Self {
            catalog: CatalogConfig::resolve(backend, data_dir)?,
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub core: CatalogCore,
    /// Where the catalog lives.
    pub config: CatalogConfig,
}

impl CliContext {
    /// Access the `CatalogCore`.
    pub const fn core(&self) -> &CatalogCore {
        &self.core
    }
}

/// Bootstrap the CLI application: open the configured stores and build
/// the core facade.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    tracing::debug!(
        target: "catalog.paths",
        backend = %config.catalog.backend,
        data_root = %config.catalog.data_root.display(),
        "CLI bootstrap resolved paths"
    );

    let stores = StoreFactory::build_stores(&config.catalog).await?;

    Ok(CliContext {
        core: CatalogCore::new(stores),
        config: config.catalog,
    })
}
