//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_optional;

/// Print the item at a 1-based position.
pub async fn execute(ctx: &CliContext, id: i64) -> Result<()> {
    let item = ctx.core().items().get(id).await.map_err(CliError::from)?;

    println!("Position: {id}");
    println!("Name:     {}", item.name);
    println!("Category: {}", item.category);
    println!(
        "Image:    {}",
        format_optional(item.image_name.as_deref(), "--")
    );
    if let Some(image_name) = item.image_name.as_deref() {
        println!("File:     {}", ctx.config.images_dir.join(image_name).display());
    }

    Ok(())
}
