//! Inbound payload normalization.
//!
//! Two accepted shapes: a bare JSON object carrying `message`, or a
//! gateway-style envelope whose `body` field is a JSON-encoded string
//! containing the same object. The envelope wins when both are present.

use serde::Deserialize;

use vigil_core::{VigilError, VigilResult};

/// The tagged union of accepted request shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClassifyPayload {
    /// `{"body": "{\"message\": ...}"}` — string-encoded inner object.
    Enveloped { body: String },
    /// `{"message": "..."}` directly.
    Direct {
        #[serde(default)]
        message: Option<String>,
    },
}

impl ClassifyPayload {
    /// Parse a raw JSON value into one of the accepted shapes.
    pub fn from_value(value: serde_json::Value) -> VigilResult<Self> {
        serde_json::from_value(value).map_err(|e| VigilError::Validation {
            reason: format!("unrecognized request shape: {e}"),
        })
    }

    /// Normalize either shape down to the trimmed message text.
    pub fn into_message(self) -> VigilResult<String> {
        let raw = match self {
            Self::Enveloped { body } => {
                let inner: serde_json::Value =
                    serde_json::from_str(&body).map_err(|e| VigilError::Validation {
                        reason: format!("body is not valid JSON: {e}"),
                    })?;
                inner
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            }
            Self::Direct { message } => message,
        };

        match raw.map(|m| m.trim().to_string()) {
            Some(m) if !m.is_empty() => Ok(m),
            _ => Err(VigilError::Validation {
                reason: "missing or empty 'message' in request".to_string(),
            }),
        }
    }
}
