//! Image handler - serves stored images by reference.

use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::response::Response;
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::error::HttpError;
use crate::state::AppState;

/// Serve `/image/{image_filename}`.
///
/// Unknown references fall back to the default image; malformed ones are
/// rejected with 400 before touching the filesystem.
pub async fn get(
    State(state): State<AppState>,
    Path(image_filename): Path<String>,
    request: Request,
) -> Result<Response, HttpError> {
    let path = state.core.images().resolve(&image_filename).await?;

    let response = ServeFile::new(&path)
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});

    Ok(response.map(Body::new))
}
