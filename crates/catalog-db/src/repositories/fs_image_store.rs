//! Filesystem implementation of the `ImageStore` trait.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;

use catalog_core::{
    DEFAULT_IMAGE, ImageError, ImageStore, content_address, ensure_directory,
    ensure_jpg_upload, validate_reference,
};

/// Flat directory of `<sha256>.jpg` files plus the reserved `default.jpg`.
pub struct FsImageStore {
    dir: PathBuf,
    counter: AtomicU64,
}

impl FsImageStore {
    /// Create a store rooted at `dir`. The directory is not touched until
    /// [`Self::ensure_dir`] or the first upload.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            counter: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the image directory if it does not exist yet, and remove temp
    /// files left behind by an interrupted upload.
    pub fn ensure_dir(&self) -> Result<(), ImageError> {
        ensure_directory(&self.dir).map_err(|e| ImageError::Io(e.to_string()))?;

        let entries = std::fs::read_dir(&self.dir).map_err(|e| self.io_error(&self.dir, &e))?;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if is_temp_name(&name) {
                match std::fs::remove_file(entry.path()) {
                    Ok(()) => tracing::debug!(
                        target: "catalog.images",
                        file = %name,
                        "Removed stale upload"
                    ),
                    Err(e) => tracing::warn!(
                        target: "catalog.images",
                        file = %name,
                        error = %e,
                        "Could not remove stale upload"
                    ),
                }
            }
        }
        Ok(())
    }

    /// Path of the image served in place of missing references.
    pub fn default_image_path(&self) -> PathBuf {
        self.dir.join(DEFAULT_IMAGE)
    }

    fn io_error(&self, path: &Path, err: &std::io::Error) -> ImageError {
        ImageError::Io(format!("{}: {err}", path.display()))
    }
}

fn is_temp_name(name: &str) -> bool {
    name.starts_with('.') && name.ends_with(".tmp")
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(&self, bytes: &[u8], original_filename: &str) -> Result<String, ImageError> {
        ensure_jpg_upload(original_filename)?;

        let reference = content_address(bytes);
        let target = self.dir.join(&reference);

        if fs::try_exists(&target)
            .await
            .map_err(|e| self.io_error(&target, &e))?
        {
            tracing::debug!(
                target: "catalog.images",
                reference = %reference,
                "Image already stored"
            );
            return Ok(reference);
        }

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| self.io_error(&self.dir, &e))?;

        // Unique per process and call so concurrent uploads of the same bytes never share a temp file.
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let tmp = self
            .dir
            .join(format!(".{reference}.{}.{n}.tmp", std::process::id()));

        if let Err(e) = fs::write(&tmp, bytes).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.io_error(&tmp, &e));
        }
        if let Err(e) = fs::rename(&tmp, &target).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(self.io_error(&target, &e));
        }

        tracing::debug!(
            target: "catalog.images",
            reference = %reference,
            size = bytes.len(),
            original = original_filename,
            "Stored image"
        );
        Ok(reference)
    }

    async fn resolve(&self, reference: &str) -> Result<PathBuf, ImageError> {
        validate_reference(reference)?;

        let path = self.dir.join(reference);
        let exists = fs::try_exists(&path)
            .await
            .map_err(|e| self.io_error(&path, &e))?;

        if exists {
            Ok(path)
        } else {
            tracing::debug!(
                target: "catalog.images",
                reference,
                "Image not found, using default"
            );
            Ok(self.default_image_path())
        }
    }
}
