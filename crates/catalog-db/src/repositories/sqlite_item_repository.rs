//! `SQLite` implementation of the `ItemRepository` trait.

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use catalog_core::{Category, Item, ItemRepository, RepositoryError};

use super::row_mappers::{ITEM_SELECT, row_to_category, row_to_item, storage_error};

/// `SQLite` implementation of the `ItemRepository` trait.
///
/// Items reference categories by id; category names are created on first
/// use. An append runs the category upsert and the item insert in one
/// transaction.
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Create a new `SQLite` item repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing only).
    #[cfg(test)]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Look up a category id by exact name, creating the category on a miss.
    pub async fn ensure_category(&self, name: &str) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(storage_error)?;
        upsert_category(&mut conn, name).await
    }

    /// Append one row to `items`.
    pub async fn insert_item(
        &self,
        name: &str,
        category_id: i64,
        image_name: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.pool.acquire().await.map_err(storage_error)?;
        insert_item_row(&mut conn, name, category_id, image_name).await
    }

    /// List all categories in creation order.
    pub async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_category).collect()
    }
}

async fn upsert_category(conn: &mut SqliteConnection, name: &str) -> Result<i64, RepositoryError> {
    sqlx::query("INSERT INTO categories (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
        .bind(name)
        .execute(&mut *conn)
        .await
        .map_err(storage_error)?;

    sqlx::query_scalar::<_, i64>("SELECT id FROM categories WHERE name = ?")
        .bind(name)
        .fetch_one(&mut *conn)
        .await
        .map_err(storage_error)
}

async fn insert_item_row(
    conn: &mut SqliteConnection,
    name: &str,
    category_id: i64,
    image_name: Option<&str>,
) -> Result<(), RepositoryError> {
    sqlx::query("INSERT INTO items (name, category_id, image_name) VALUES (?, ?, ?)")
        .bind(name)
        .bind(category_id)
        .bind(image_name)
        .execute(&mut *conn)
        .await
        .map_err(storage_error)?;

    Ok(())
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn list_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let query = format!("{ITEM_SELECT} ORDER BY items.id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_item).collect()
    }

    async fn get_by_index(&self, index: i64) -> Result<Item, RepositoryError> {
        if index <= 0 {
            return Err(RepositoryError::IndexOutOfRange(index));
        }

        let query = format!("{ITEM_SELECT} WHERE items.id = ?");

        let row = sqlx::query(&query)
            .bind(index)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or(RepositoryError::IndexOutOfRange(index))?;

        row_to_item(&row)
    }

    async fn append(&self, item: &Item) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let category_id = upsert_category(&mut tx, &item.category).await?;
        insert_item_row(&mut tx, &item.name, category_id, item.image_name.as_deref()).await?;

        tx.commit().await.map_err(storage_error)?;
        Ok(())
    }
}
