//! SqliteAuditStore — owns the connection, applies pragmas and the schema
//! migration at open, implements [`IAuditStore`].

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use vigil_core::errors::StoreError;
use vigil_core::{
    AuditRecord, IAuditStore, Recommendation, Severity, SourceChannel, VigilResult,
};

use crate::{migrations, pragmas, to_store_err};

/// The production audit store. One writer connection behind a mutex —
/// the relay writes a single row per request.
pub struct SqliteAuditStore {
    conn: Mutex<Connection>,
}

impl SqliteAuditStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> VigilResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_store_err(e.to_string()))?;
        Self::initialize(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> VigilResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_store_err(e.to_string()))?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> VigilResult<Self> {
        pragmas::apply_pragmas(&conn)?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> VigilResult<T>
    where
        F: FnOnce(&Connection) -> VigilResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|_| to_store_err("connection lock poisoned".to_string()))?;
        f(&conn)
    }
}

type RawRow = (
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
);

/// Decode one raw TEXT row into a record, rejecting values outside the
/// enumerated sets.
fn decode_row(raw: RawRow) -> VigilResult<AuditRecord> {
    let (id, message, analysis, severity, source, recommendation, agent_decision, timestamp) = raw;

    let severity = Severity::from_str(&severity).ok_or_else(|| StoreError::MalformedRow {
        id: id.clone(),
        reason: format!("unknown severity '{severity}'"),
    })?;
    let source = SourceChannel::from_str(&source).ok_or_else(|| StoreError::MalformedRow {
        id: id.clone(),
        reason: format!("unknown source '{source}'"),
    })?;
    let recommendation =
        Recommendation::from_str(&recommendation).ok_or_else(|| StoreError::MalformedRow {
            id: id.clone(),
            reason: format!("unknown recommendation '{recommendation}'"),
        })?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp)
        .map_err(|e| StoreError::MalformedRow {
            id: id.clone(),
            reason: format!("bad timestamp: {e}"),
        })?
        .with_timezone(&Utc);

    Ok(AuditRecord {
        id,
        message,
        analysis,
        severity,
        source,
        recommendation,
        agent_decision,
        timestamp,
    })
}

impl IAuditStore for SqliteAuditStore {
    fn put(&self, record: &AuditRecord) -> VigilResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO audit_records (
                    id, message, analysis, severity, source,
                    recommendation, agent_decision, timestamp
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    record.id,
                    record.message,
                    record.analysis,
                    record.severity.as_str(),
                    record.source.as_str(),
                    record.recommendation.as_str(),
                    record.agent_decision,
                    record.timestamp.to_rfc3339(),
                ],
            )
            .map_err(|e| to_store_err(format!("insert audit record: {e}")))?;
            tracing::debug!(record_id = %record.id, "store: audit record written");
            Ok(())
        })
    }

    fn scan_all(&self) -> VigilResult<Vec<AuditRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, message, analysis, severity, source,
                            recommendation, agent_decision, timestamp
                     FROM audit_records",
                )
                .map_err(|e| to_store_err(e.to_string()))?;

            let rows = stmt
                .query_map([], |row| {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                        row.get(6)?,
                        row.get(7)?,
                    ))
                })
                .map_err(|e| to_store_err(e.to_string()))?;

            let mut records = Vec::new();
            for row in rows {
                let raw: RawRow = row.map_err(|e| to_store_err(e.to_string()))?;
                records.push(decode_row(raw)?);
            }
            Ok(records)
        })
    }
}
