//! Root handler.

use axum::Json;

use crate::dto::MessageResponse;

/// Greeting used as a liveness check.
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, world!"))
}
