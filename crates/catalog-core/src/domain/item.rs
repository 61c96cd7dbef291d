//! Item domain types.
//!
//! An item is the unit of the catalog: a name, a category and an optional
//! reference to a stored image.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Persisted Types
// ─────────────────────────────────────────────────────────────────────────────

/// An item as it is stored and served.
///
/// Items carry no identifier of their own; they are addressed by their
/// 1-based position in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name. Never empty for persisted items.
    pub name: String,
    /// Category name. Never empty for persisted items.
    pub category: String,
    /// Content-addressed image file name (`<sha256-hex>.jpg`), if an image
    /// was uploaded with the item.
    #[serde(default)]
    pub image_name: Option<String>,
}

impl Item {
    /// Create an item without an image.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            image_name: None,
        }
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image(mut self, image_name: impl Into<String>) -> Self {
        self.image_name = Some(image_name.into());
        self
    }
}

/// The whole catalog as one ordered document.
///
/// This is both the on-disk layout of the JSON store and the body of the
/// list endpoint: `{"items": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// A category row in the relational store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Input Types
// ─────────────────────────────────────────────────────────────────────────────

/// Raw image bytes as received from a client, before they are addressed.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name as supplied by the client. Only its extension is used.
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("filename", &self.filename)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// An item submission that has not been validated or persisted yet.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub image: Option<ImageUpload>,
}

impl NewItem {
    /// A submission without an image.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            image: None,
        }
    }

    /// Attach an uploaded image.
    #[must_use]
    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }
}
