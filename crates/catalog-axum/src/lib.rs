//! Axum web adapter for the item catalog.
//!
//! Exposes the catalog over HTTP:
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET`  | `/` | greeting |
//! | `POST` | `/items` | multipart item submission |
//! | `GET`  | `/items` | `{"items": [...]}` |
//! | `GET`  | `/items/{id}` | item by 1-based position |
//! | `GET`  | `/image/{imageFilename}` | stored image, or the default image |

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
