//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where stores are wired together for the
//! web adapter.

use std::sync::Arc;

use anyhow::Result;
use catalog_core::{CatalogConfig, CatalogCore};
use catalog_db::StoreFactory;

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 9000;

/// Front-end origin allowed by CORS unless configured otherwise.
pub const DEFAULT_FRONT_URL: &str = "http://localhost:3000";

/// Largest accepted request body (uploads included).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Request body limit in bytes.
    pub max_upload_bytes: usize,
    /// Storage locations and backend.
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Default port and body limit, CORS restricted to the default front end.
    pub fn new(catalog: CatalogConfig) -> Self {
        Self {
            port: DEFAULT_PORT,
            cors: CorsConfig::AllowOrigins(vec![DEFAULT_FRONT_URL.to_string()]),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            catalog,
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    #[must_use]
    pub const fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = limit;
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<CatalogCore>,
    /// Request body limit applied by the router.
    pub max_upload_bytes: usize,
}

/// Open the configured stores and assemble the handler context.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let catalog = &config.catalog;

    tracing::info!(
        target: "catalog.paths",
        backend = %catalog.backend,
        data_root = %catalog.data_root.display(),
        item_store = %catalog.item_store_path().display(),
        images_dir = %catalog.images_dir.display(),
        "Axum bootstrap resolved paths"
    );

    let stores = StoreFactory::build_stores(catalog).await?;
    let core = Arc::new(CatalogCore::new(stores));

    Ok(AxumContext {
        core,
        max_upload_bytes: config.max_upload_bytes,
    })
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("catalog server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
