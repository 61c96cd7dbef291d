//! Image service - resolves image references for serving.

use std::path::PathBuf;
use std::sync::Arc;

use crate::ports::{CoreError, ImageStore};

/// Service for image lookups.
pub struct ImageService {
    store: Arc<dyn ImageStore>,
}

impl ImageService {
    /// Create a new image service.
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    /// Resolve a reference to the file to serve (the default image when the
    /// reference is valid but missing).
    pub async fn resolve(&self, reference: &str) -> Result<PathBuf, CoreError> {
        self.store.resolve(reference).await.map_err(CoreError::from)
    }
}
