// Module declarations
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod project;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cli_context::{ExportContext, ExportContextBuilder};
pub use client::{GhCliClient, GraphQLClient, QueryExecutor};
pub use error::{ExportError, ExportResult};
pub use export::{normalize_item, Row, Table};
pub use models::{Connection, FieldValue, ItemContent, ProjectItem, ProjectOwner, ProjectRef};
