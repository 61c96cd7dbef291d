//! Catalog configuration.
//!
//! Resolution order for the data root: explicit override (CLI flag) >
//! `CATALOG_DATA_DIR` > current working directory. File names inside the
//! data root are fixed.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "CATALOG_DATA_DIR";

/// JSON catalog document, relative to the data root.
pub const ITEMS_FILE: &str = "items.json";

/// SQLite database file, relative to the data root.
pub const DATABASE_FILE: &str = "catalog.db";

/// Image directory, relative to the data root.
pub const IMAGES_DIR: &str = "images";

/// Which item store backs the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// A single `{"items": [...]}` document.
    #[default]
    Json,
    /// `items` + `categories` tables in SQLite.
    Sqlite,
}

impl StorageBackend {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "sqlite" | "sql" | "db" => Ok(Self::Sqlite),
            other => Err(PathError::UnknownBackend(other.to_string())),
        }
    }
}

/// Resolve the data root directory.
///
/// Does not create the directory; stores do that when they initialise.
pub fn data_root(override_dir: Option<&Path>) -> Result<PathBuf, PathError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}

/// All storage locations for one catalog instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Selected item store.
    pub backend: StorageBackend,
    /// Directory holding all catalog state.
    pub data_root: PathBuf,
    /// JSON catalog document (used by the JSON backend).
    pub items_file: PathBuf,
    /// SQLite database (used by the SQLite backend).
    pub database_path: PathBuf,
    /// Content-addressed image directory.
    pub images_dir: PathBuf,
}

impl CatalogConfig {
    /// Lay out the standard file names under `data_root`.
    pub fn new(backend: StorageBackend, data_root: impl Into<PathBuf>) -> Self {
        let data_root = data_root.into();
        Self {
            backend,
            items_file: data_root.join(ITEMS_FILE),
            database_path: data_root.join(DATABASE_FILE),
            images_dir: data_root.join(IMAGES_DIR),
            data_root,
        }
    }

    /// Resolve the data root from the environment and lay out paths under it.
    pub fn resolve(
        backend: StorageBackend,
        override_dir: Option<&Path>,
    ) -> Result<Self, PathError> {
        Ok(Self::new(backend, data_root(override_dir)?))
    }

    /// Path of the file the active backend persists items to.
    pub fn item_store_path(&self) -> &Path {
        match self.backend {
            StorageBackend::Json => &self.items_file,
            StorageBackend::Sqlite => &self.database_path,
        }
    }
}

impl fmt::Display for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "backend = {}", self.backend)?;
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "items_file = {}", self.items_file.display())?;
        writeln!(f, "database_path = {}", self.database_path.display())?;
        write!(f, "images_dir = {}", self.images_dir.display())
    }
}
