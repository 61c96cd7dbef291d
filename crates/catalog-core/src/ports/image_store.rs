//! Image store trait definition.

use std::path::PathBuf;

use async_trait::async_trait;

use super::ImageError;

/// Content-addressed storage for item images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `bytes` and return the reference they are stored under.
    ///
    /// Returns `Err(ImageError::UnsupportedFormat)` if `original_filename`
    /// is not a `.jpg` file.
    async fn store(&self, bytes: &[u8], original_filename: &str) -> Result<String, ImageError>;

    /// Map a reference to the file that should be served for it.
    ///
    /// Missing images resolve to the default image rather than an error.
    async fn resolve(&self, reference: &str) -> Result<PathBuf, ImageError>;
}
