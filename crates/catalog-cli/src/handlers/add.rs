//! Add command handler.

use std::path::Path;

use anyhow::Result;

use catalog_core::{ImageUpload, Item, NewItem};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Read the optional image from disk and submit the item.
pub async fn execute(
    ctx: &CliContext,
    name: &str,
    category: &str,
    image: Option<&Path>,
) -> Result<Item> {
    let mut new_item = NewItem::new(name, category);

    if let Some(path) = image {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        new_item = new_item.with_image(ImageUpload::new(filename, bytes));
    }

    let item = ctx.core().items().add(new_item).await.map_err(CliError::from)?;

    println!(
        "item received: {}, {}, {}",
        item.name,
        item.category,
        item.image_name.as_deref().unwrap_or("-")
    );

    Ok(item)
}
