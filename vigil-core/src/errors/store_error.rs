/// Storage-layer errors for the SQLite audit store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed: {reason}")]
    MigrationFailed { reason: String },

    #[error("malformed row for record {id}: {reason}")]
    MalformedRow { id: String, reason: String },
}
