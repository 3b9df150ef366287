//! RelayService — one classification request end to end: payload
//! normalization, classifier call, verdict, best-effort persistence.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use vigil_core::{AuditRecord, IAuditStore, IClassifier, VigilError, VigilResult};
use vigil_verdict::VerdictEngine;

use crate::payload::ClassifyPayload;

/// The classification relay. Holds shared, read-only collaborator handles;
/// carries no per-request state.
pub struct RelayService {
    classifier: Arc<dyn IClassifier>,
    store: Arc<dyn IAuditStore>,
}

impl RelayService {
    pub fn new(classifier: Arc<dyn IClassifier>, store: Arc<dyn IAuditStore>) -> Self {
        Self { classifier, store }
    }

    /// Run the full pipeline for one raw request value.
    ///
    /// Every step returns an explicit result; the HTTP layer maps the final
    /// error (if any) to the generic envelope. A store-write failure is
    /// deliberately not a request failure — the record is still returned.
    pub fn handle(&self, raw: serde_json::Value) -> VigilResult<AuditRecord> {
        let message = ClassifyPayload::from_value(raw)?.into_message()?;
        tracing::info!(chars = message.len(), "relay: message received");

        let prediction = self.classifier.classify(&message)?;
        let verdict = VerdictEngine::evaluate(&message, prediction.label, prediction.score);
        tracing::info!(
            severity = verdict.severity.as_str(),
            overridden = verdict.overridden,
            "relay: verdict derived"
        );

        let record = AuditRecord::create(
            message,
            verdict.verdict_text,
            verdict.severity,
            verdict.source,
            verdict.recommendation,
            verdict.explanation,
        );

        match self.store.put(&record) {
            Ok(()) => tracing::info!(record_id = %record.id, "relay: audit record persisted"),
            // Best-effort: surfaced to operators, never to the caller.
            Err(e) => {
                tracing::error!(record_id = %record.id, error = %e, "relay: failed to persist audit record")
            }
        }

        Ok(record)
    }
}

/// Generic failure envelope returned for any relay error. Error kinds are
/// only distinguishable via logs, never via the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub details: String,
}

impl ErrorEnvelope {
    pub fn from_error(error: &VigilError) -> Self {
        Self {
            error: "Internal Server Error".to_string(),
            details: error.to_string(),
        }
    }
}
