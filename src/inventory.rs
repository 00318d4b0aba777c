//! Inventory façade - maps CLI verbs onto typed store queries
//!
//! Every operation takes the raw positional strings the dispatcher
//! collected, normalizes item names with [`title_case`], and returns a
//! typed result. Rendering lives in [`crate::output`].

use crate::record::{Record, title_case};
use crate::storage::InventoryStore;
use crate::{Error, Result, parse_amount};
use serde::Serialize;

/// Outcome of a namespace lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NamespaceQuery {
    /// No namespace argument was supplied; nothing was looked up
    NoNamespace,
    /// Records found under the normalized namespace (possibly none)
    Found {
        namespace: String,
        records: Vec<Record>,
    },
}

/// The inventory, backed by an open store.
pub struct Inventory {
    store: InventoryStore,
}

impl Inventory {
    pub fn new(store: InventoryStore) -> Self {
        Self { store }
    }

    /// Track a new item.
    ///
    /// The amount is parsed before anything touches the store, and an item
    /// that already exists is rejected with [`Error::DuplicateItem`].
    pub fn create(&self, item: &str, amount: &str, namespace: Option<&str>) -> Result<Record> {
        let amount = parse_amount(amount)?;
        let record = Record::new(item, amount, namespace);
        self.store.insert_record(&record)?;
        Ok(record)
    }

    /// All records, oldest first
    pub fn list(&self) -> Result<Vec<Record>> {
        self.store.all_records()
    }

    /// Set an item's amount. Returns rows changed; a missing item is a silent no-op.
    pub fn update(&self, item: &str, amount: &str) -> Result<usize> {
        let amount = parse_amount(amount)?;
        self.store.update_amount(&title_case(item), amount)
    }

    /// Stop tracking an item. Returns rows removed; a missing item is a silent no-op.
    pub fn remove(&self, item: &str) -> Result<usize> {
        self.store.delete_record(&title_case(item))
    }

    /// Number of tracked items
    pub fn count(&self) -> Result<usize> {
        self.store.count_records()
    }

    /// Lower an item's amount by one, with no floor.
    ///
    /// Fails with [`Error::NotFound`] when the item is not tracked.
    pub fn decrease(&self, item: &str) -> Result<Record> {
        let item = title_case(item);
        if self.store.decrement_amount(&item)? == 0 {
            return Err(Error::NotFound(item));
        }
        self.store
            .get_record(&item)?
            .ok_or(Error::NotFound(item))
    }

    /// Records grouped under `namespace`.
    pub fn query_by_namespace(&self, namespace: &str) -> Result<NamespaceQuery> {
        let namespace = title_case(namespace);
        if namespace.is_empty() {
            return Ok(NamespaceQuery::NoNamespace);
        }

        let records = self.store.records_in_namespace(&namespace)?;
        Ok(NamespaceQuery::Found { namespace, records })
    }
}
