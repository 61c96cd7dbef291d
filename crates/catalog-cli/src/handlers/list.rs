//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{format_optional, print_separator, truncate_string};

/// Execute the list command: print every item as a table row, numbered by
/// the position `show` accepts.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let items = ctx.core().items().list().await.map_err(CliError::from)?;

    if items.is_empty() {
        println!("No items in the catalog.");
        println!("Use 'catalog add --name <name> --category <category>' to add one.");
        return Ok(());
    }

    println!("Found {} item(s):\n", items.len());
    println!("{:<5} {:<25} {:<20} Image", "#", "Name", "Category");
    print_separator(120);

    for (position, item) in items.iter().enumerate() {
        println!(
            "{:<5} {:<25} {:<20} {}",
            position + 1,
            truncate_string(&item.name, 24),
            truncate_string(&item.category, 19),
            format_optional(item.image_name.as_deref(), "--"),
        );
    }

    Ok(())
}
