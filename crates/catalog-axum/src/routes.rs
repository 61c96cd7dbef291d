//! Route definitions and router construction.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE])
                .allow_headers(Any)
        }
    }
}

/// Create the catalog router.
///
/// Layers, outermost first: CORS, request tracing, panic recovery, body limit.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let body_limit = DefaultBodyLimit::max(ctx.max_upload_bytes);
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::root::hello))
        .route(
            "/items",
            get(handlers::items::list).post(handlers::items::add),
        )
        .route("/items/{id}", get(handlers::items::get))
        .route("/image/{image_filename}", get(handlers::images::get))
        .with_state(state)
        .layer(body_limit)
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_config))
}
