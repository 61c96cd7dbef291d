//! Command handlers.
//!
//! Each handler is a thin wrapper: it calls into `CatalogCore` through the
//! `CliContext` and formats the result for the terminal.

pub mod add;
pub mod list;
pub mod paths;
pub mod serve;
pub mod show;
