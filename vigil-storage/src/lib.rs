//! # vigil-storage
//!
//! SQLite-backed audit store: schema migration, connection pragmas, and
//! the [`vigil_core::IAuditStore`] implementation.

mod engine;
mod migrations;
mod pragmas;

pub use engine::SqliteAuditStore;

use vigil_core::errors::StoreError;
use vigil_core::VigilError;

/// Wrap a raw SQLite failure message into the workspace error type.
pub(crate) fn to_store_err(message: String) -> VigilError {
    StoreError::Sqlite { message }.into()
}
