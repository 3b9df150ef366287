//! # vigil-core
//!
//! Foundation crate for the Vigil classification relay.
//! Defines the audit record model, label tokens, errors, config, and the
//! collaborator traits. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod label;
pub mod record;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RelayConfig;
pub use errors::{VigilError, VigilResult};
pub use label::ClassLabel;
pub use record::{AuditRecord, Recommendation, Severity, SourceChannel};
pub use traits::{IAuditStore, IClassifier, Prediction};
