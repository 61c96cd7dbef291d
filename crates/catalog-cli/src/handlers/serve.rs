//! Serve command handler.

use anyhow::Result;

use catalog_axum::{CorsConfig, ServerConfig, start_server};

use crate::bootstrap::CliConfig;

/// Arguments of the `serve` subcommand.
#[derive(Debug, Clone)]
pub struct ServeArgs {
    pub port: u16,
    pub front_urls: Vec<String>,
    pub cors_allow_all: bool,
    pub max_upload_bytes: usize,
}

/// Translate CLI arguments into a server configuration.
pub fn server_config(config: &CliConfig, args: ServeArgs) -> ServerConfig {
    let server = ServerConfig::new(config.catalog.clone())
        .with_port(args.port)
        .with_max_upload_bytes(args.max_upload_bytes);

    if args.cors_allow_all {
        ServerConfig {
            cors: CorsConfig::AllowAll,
            ..server
        }
    } else {
        server.with_allowed_origins(args.front_urls)
    }
}

/// Run the HTTP server until it fails or the process is stopped.
pub async fn execute(config: &CliConfig, args: ServeArgs) -> Result<()> {
    start_server(server_config(config, args)).await
}
