//! Idempotent schema migration, run at every open.

use rusqlite::Connection;

use vigil_core::errors::StoreError;
use vigil_core::VigilResult;

/// Create the audit table and its recency index if absent.
pub fn run_migrations(conn: &Connection) -> VigilResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS audit_records (
            id             TEXT PRIMARY KEY,
            message        TEXT NOT NULL,
            analysis       TEXT NOT NULL,
            severity       TEXT NOT NULL,
            source         TEXT NOT NULL,
            recommendation TEXT NOT NULL,
            agent_decision TEXT NOT NULL,
            timestamp      TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_audit_records_timestamp
            ON audit_records(timestamp);
        ",
    )
    .map_err(|e| {
        StoreError::MigrationFailed {
            reason: e.to_string(),
        }
        .into()
    })
}
