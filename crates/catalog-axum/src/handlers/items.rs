//! Item handlers - submission, listing and lookup by position.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Multipart, Path, State};

use catalog_core::{ImageUpload, Item, ItemList, NewItem};

use crate::dto::MessageResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Accept a multipart form with `name`, `category` and an optional `image` file.
pub async fn add(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MessageResponse>, HttpError> {
    let mut new_item = NewItem::new(String::new(), String::new());

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => new_item.name = field.text().await?,
            "category" => new_item.category = field.text().await?,
            "image" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was chosen.
                if !(filename.is_empty() && bytes.is_empty()) {
                    new_item.image = Some(ImageUpload::new(filename, bytes.to_vec()));
                }
            }
            other => {
                tracing::debug!(target: "catalog.http", field = other, "Ignoring form field");
            }
        }
    }

    let item = state.core.items().add(new_item).await?;

    Ok(Json(MessageResponse::new(format!(
        "item received: {}, {}, {}",
        item.name,
        item.category,
        item.image_name.as_deref().unwrap_or("-")
    ))))
}

/// List all items in insertion order.
pub async fn list(State(state): State<AppState>) -> Result<Json<ItemList>, HttpError> {
    Ok(Json(ItemList::from(state.core.items().list().await?)))
}

/// Get a single item by its 1-based position.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.core.items().get(id).await?))
}
