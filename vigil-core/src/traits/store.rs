use crate::errors::VigilResult;
use crate::record::AuditRecord;

/// Append + full-scan audit record store.
pub trait IAuditStore: Send + Sync {
    /// Persist one record. Records are immutable once written; `id` must be
    /// unique for the lifetime of the store.
    fn put(&self, record: &AuditRecord) -> VigilResult<()>;

    /// Return every persisted record, unordered. Callers own the sort.
    fn scan_all(&self) -> VigilResult<Vec<AuditRecord>>;
}
