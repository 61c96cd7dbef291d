//! JSON-document implementation of the `ItemRepository` trait.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use catalog_core::{Item, ItemList, ItemRepository, RepositoryError};

/// Catalog stored as a single `{"items": [...]}` file.
///
/// Appends are read-modify-write cycles over the whole document. They are
/// serialized behind an async mutex and land through a temp file + rename,
/// so readers never observe a half-written catalog and concurrent appends
/// inside one process are never lost.
pub struct JsonItemRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonItemRepository {
    /// Create a repository backed by the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the catalog document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty catalog document if none exists yet.
    ///
    /// Call this during initialization; an existing document is left as is.
    pub async fn ensure_file(&self) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;

        if fs::try_exists(&self.path).await.map_err(|e| self.unavailable(&e))? {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.unavailable(&e))?;
            }
        }

        self.write(&ItemList::default()).await
    }

    async fn read(&self) -> Result<ItemList, RepositoryError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| self.unavailable(&e))?;
        self.parse(&bytes)
    }

    /// Like `read`, but a missing document is an empty catalog.
    async fn read_or_empty(&self) -> Result<ItemList, RepositoryError> {
        match fs::read(&self.path).await {
            Ok(bytes) => self.parse(&bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ItemList::default()),
            Err(e) => Err(self.unavailable(&e)),
        }
    }

    fn parse(&self, bytes: &[u8]) -> Result<ItemList, RepositoryError> {
        serde_json::from_slice(bytes).map_err(|e| {
            RepositoryError::Corrupt(format!("{}: {e}", self.path.display()))
        })
    }

    async fn write(&self, list: &ItemList) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec_pretty(list)
            .map_err(|e| RepositoryError::Corrupt(e.to_string()))?;

        let tmp = temp_sibling(&self.path);
        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| self.unavailable(&e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.unavailable(&e))?;

        Ok(())
    }

    fn unavailable(&self, err: &std::io::Error) -> RepositoryError {
        RepositoryError::Unavailable(format!("{}: {err}", self.path.display()))
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl ItemRepository for JsonItemRepository {
    async fn list_all(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.read().await?.items)
    }

    async fn get_by_index(&self, index: i64) -> Result<Item, RepositoryError> {
        let position = index
            .checked_sub(1)
            .and_then(|p| usize::try_from(p).ok())
            .ok_or(RepositoryError::IndexOutOfRange(index))?;

        let mut items = self.read().await?.items;
        if position >= items.len() {
            return Err(RepositoryError::IndexOutOfRange(index));
        }
        Ok(items.swap_remove(position))
    }

    async fn append(&self, item: &Item) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;

        let mut list = self.read_or_empty().await?;
        list.items.push(item.clone());
        self.write(&list).await?;

        tracing::debug!(
            target: "catalog.store.json",
            path = %self.path.display(),
            len = list.items.len(),
            "Appended item"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn repo_in(dir: &tempfile::TempDir) -> JsonItemRepository {
        JsonItemRepository::new(dir.path().join("items.json"))
    }

    #[tokio::test]
    async fn test_append_then_list_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);

        repo.append(&Item::new("shirt", "fashion")).await.unwrap();
        repo.append(&Item::new("pot", "kitchen")).await.unwrap();

        let items = repo.list_all().await.unwrap();
        assert_eq!(
            items,
            vec![Item::new("shirt", "fashion"), Item::new("pot", "kitchen")]
        );
        assert_eq!(repo.get_by_index(2).await.unwrap(), Item::new("pot", "kitchen"));
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);

        repo.append(&Item::new("shirt", "fashion")).await.unwrap();
        repo.append(&Item::new("shirt", "fashion")).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_index_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);
        repo.append(&Item::new("shirt", "fashion")).await.unwrap();

        assert_eq!(repo.get_by_index(1).await.unwrap().name, "shirt");
        for index in [0, -3, 2, i64::MIN, i64::MAX] {
            assert!(matches!(
                repo.get_by_index(index).await,
                Err(RepositoryError::IndexOutOfRange(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_list_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);
        assert!(matches!(
            repo.list_all().await,
            Err(RepositoryError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_ensure_file_creates_empty_document_once() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonItemRepository::new(dir.path().join("data").join("items.json"));

        repo.ensure_file().await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());

        repo.append(&Item::new("shirt", "fashion")).await.unwrap();
        repo.ensure_file().await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_reported_and_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);
        std::fs::write(repo.path(), b"{not json").unwrap();

        assert!(matches!(
            repo.list_all().await,
            Err(RepositoryError::Corrupt(_))
        ));
        assert!(matches!(
            repo.append(&Item::new("shirt", "fashion")).await,
            Err(RepositoryError::Corrupt(_))
        ));
        assert_eq!(std::fs::read(repo.path()).unwrap(), b"{not json");
    }

    #[tokio::test]
    async fn test_document_uses_items_wrapper() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(&dir);
        repo.append(&Item::new("pot", "kitchen").with_image("abc.jpg"))
            .await
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(repo.path()).unwrap()).unwrap();
        assert_eq!(raw["items"][0]["image_name"], "abc.jpg");
        assert!(!dir.path().join("items.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Arc::new(repo_in(&dir));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.append(&Item::new(format!("item-{i}"), "bulk")).await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.list_all().await.unwrap().len(), 16);
    }
}
