//! Database schema definitions

/// SQL to create the records table
pub const CREATE_RECORDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    item TEXT PRIMARY KEY NOT NULL,
    amount INTEGER NOT NULL,
    namespace TEXT NOT NULL DEFAULT 'Misc'
)
"#;

/// Adds the namespace column to tables created before namespaces existed
pub const ADD_NAMESPACE_COLUMN: &str =
    "ALTER TABLE records ADD COLUMN namespace TEXT NOT NULL DEFAULT 'Misc'";

/// Fills in rows left without a namespace by an earlier migration
pub const BACKFILL_NAMESPACE: &str =
    "UPDATE records SET namespace = 'Misc' WHERE namespace IS NULL OR namespace = ''";

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_records_namespace ON records(namespace)",
];
