//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with a single table:
//! - records(item, amount, namespace)

pub mod schema;
pub mod sqlite;

pub use sqlite::InventoryStore;
