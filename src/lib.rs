//! # Denko - Inventory Management
//!
//! Tracks item counts in a local SQLite database.
//!
//! Denko provides:
//! - A single `records` table keyed by title-cased item name
//! - Optional namespace grouping for filtered listing
//! - An [`Inventory`] façade mapping CLI verbs onto typed store queries
//! - Fixed-width terminal rendering and a JSON output mode

pub mod record;
pub mod storage;
pub mod inventory;
pub mod output;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use record::{Record, title_case, DEFAULT_NAMESPACE};
pub use storage::InventoryStore;
pub use inventory::{Inventory, NamespaceQuery};

use std::path::PathBuf;

/// Result type alias for Denko operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Denko operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid amount '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Could not open inventory at {}: {source}", .path.display())]
    StoreOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Item already tracked: {0}")]
    DuplicateItem(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a positional amount argument.
pub fn parse_amount(input: &str) -> Result<i64> {
    input.parse::<i64>().map_err(|source| Error::Parse {
        input: input.to_string(),
        source,
    })
}
