//! Paths command handler.
//!
//! Displays all resolved storage paths for diagnostics.

use anyhow::Result;

use crate::bootstrap::CliConfig;

/// Print the resolved configuration in `key = value` format.
pub fn execute(config: &CliConfig) -> Result<()> {
    println!("{}", config.catalog);
    Ok(())
}
