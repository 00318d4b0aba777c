//! SQLite storage implementation

use std::path::Path;
use std::time::Duration;
use rusqlite::{Connection, ErrorCode, params, OptionalExtension};
use crate::{Result, Error};
use crate::record::Record;
use super::schema;

const RECORD_COLUMNS: &str = "item, amount, COALESCE(namespace, 'Misc')";

/// SQLite-backed storage for inventory records
pub struct InventoryStore {
    conn: Connection,
}

impl InventoryStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let open_err = |source| Error::StoreOpen {
            path: path.to_path_buf(),
            source,
        };

        let conn = Connection::open(path).map_err(open_err)?;
        conn.busy_timeout(Duration::from_secs(5)).map_err(open_err)?;
        let store = Self { conn };
        store.initialize_schema().map_err(open_err)?;
        tracing::info!("Opened inventory at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create the records table, migrating a pre-namespace table in place
    fn initialize_schema(&self) -> rusqlite::Result<()> {
        self.conn.execute(schema::CREATE_RECORDS_TABLE, [])?;

        if !self.has_column("records", "namespace")? {
            tracing::info!("Migrating records table: adding namespace column");
            self.conn.execute(schema::ADD_NAMESPACE_COLUMN, [])?;
        }

        let backfilled = self.conn.execute(schema::BACKFILL_NAMESPACE, [])?;
        if backfilled > 0 {
            tracing::info!("Filed {} records without a namespace under Misc", backfilled);
        }

        for stmt in schema::CREATE_INDEXES {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> rusqlite::Result<bool> {
        let mut stmt = self.conn.prepare(&format!("PRAGMA table_info({})", table))?;
        let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
        for name in names {
            if name?.eq_ignore_ascii_case(column) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // ========== Record Operations ==========

    /// Insert a new record. Rejects an item that is already tracked.
    pub fn insert_record(&self, record: &Record) -> Result<()> {
        if self.get_record(&record.item)?.is_some() {
            tracing::warn!("Rejected duplicate item {}", record.item);
            return Err(Error::DuplicateItem(record.item.clone()));
        }

        let inserted = self.conn.execute(
            "INSERT INTO records (item, amount, namespace) VALUES (?1, ?2, ?3)",
            params![record.item, record.amount, record.namespace],
        );

        match inserted {
            Ok(_) => {
                tracing::debug!("Inserted {} ({}) into {}", record.item, record.amount, record.namespace);
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(Error::DuplicateItem(record.item.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get a record by its (already normalized) item name
    pub fn get_record(&self, item: &str) -> Result<Option<Record>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM records WHERE item = ?1", RECORD_COLUMNS),
                [item],
                Self::row_to_record,
            )
            .optional()
            .map_err(Into::into)
    }

    /// All records in insertion order
    pub fn all_records(&self) -> Result<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            &format!("SELECT {} FROM records ORDER BY rowid", RECORD_COLUMNS)
        )?;

        let records = stmt
            .query_map([], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Records in one namespace, in insertion order
    pub fn records_in_namespace(&self, namespace: &str) -> Result<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            &format!("SELECT {} FROM records WHERE namespace = ?1 ORDER BY rowid", RECORD_COLUMNS)
        )?;

        let records = stmt
            .query_map([namespace], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    /// Set the amount of an item. Returns the number of rows changed.
    pub fn update_amount(&self, item: &str, amount: i64) -> Result<usize> {
        let changed = self.conn.execute(
            "UPDATE records SET amount = ?1 WHERE item = ?2",
            params![amount, item],
        )?;
        tracing::debug!("Set {} to {} ({} rows)", item, amount, changed);
        Ok(changed)
    }

    /// Subtract one from the amount of an item. Returns the number of rows changed.
    pub fn decrement_amount(&self, item: &str) -> Result<usize> {
        let changed = self.conn.execute(
            "UPDATE records SET amount = amount - 1 WHERE item = ?1",
            [item],
        )?;
        tracing::debug!("Decremented {} ({} rows)", item, changed);
        Ok(changed)
    }

    /// Delete a record. Returns the number of rows removed.
    pub fn delete_record(&self, item: &str) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM records WHERE item = ?1", [item])?;
        tracing::debug!("Removed {} ({} rows)", item, removed);
        Ok(removed)
    }

    /// Count all records
    pub fn count_records(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a Record
    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<Record> {
        Ok(Record {
            item: row.get(0)?,
            amount: row.get(1)?,
            namespace: row.get(2)?,
        })
    }
}
