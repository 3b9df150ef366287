//! ReaderService — full scan of the audit store, newest first.

use std::sync::Arc;

use vigil_core::{AuditRecord, IAuditStore, VigilResult};

/// The audit read path. Independent of the relay; shares only the
/// persisted record schema.
pub struct ReaderService {
    store: Arc<dyn IAuditStore>,
}

impl ReaderService {
    pub fn new(store: Arc<dyn IAuditStore>) -> Self {
        Self { store }
    }

    /// Fetch all audit records sorted by timestamp, descending.
    pub fn list_records(&self) -> VigilResult<Vec<AuditRecord>> {
        let mut records = self.store.scan_all()?;
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        tracing::info!(count = records.len(), "reader: records fetched");
        Ok(records)
    }
}
