//! Row mapping helpers for `SQLite` queries.

use catalog_core::{Category, Item, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT for items with their category name denormalised.
pub const ITEM_SELECT: &str = "SELECT items.name AS name, categories.name AS category, items.image_name AS image_name FROM items JOIN categories ON items.category_id = categories.id";

/// Map a sqlx error onto the repository taxonomy.
///
/// Rows that cannot be decoded mean the stored data is bad; everything else
/// means the database could not be reached or written.
pub fn storage_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::Corrupt(err.to_string()),
        other => RepositoryError::Unavailable(other.to_string()),
    }
}

/// Parse a row produced by [`ITEM_SELECT`] into an Item.
pub fn row_to_item(row: &SqliteRow) -> Result<Item, RepositoryError> {
    Ok(Item {
        name: row.try_get("name").map_err(storage_error)?,
        category: row.try_get("category").map_err(storage_error)?,
        image_name: row.try_get("image_name").map_err(storage_error)?,
    })
}

/// Parse a `categories` row.
pub fn row_to_category(row: &SqliteRow) -> Result<Category, RepositoryError> {
    Ok(Category {
        id: row.try_get("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
    })
}
