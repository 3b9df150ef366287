//! Wire types for the inference endpoint.
//!
//! Request: `{"inputs": "<text>"}`. Response: a JSON array of
//! `{label, score}` entries ordered by confidence; only the first entry
//! is consumed, with defensive defaults for anything missing.

use serde::{Deserialize, Serialize};

use vigil_core::errors::InferenceError;
use vigil_core::{ClassLabel, Prediction, VigilResult};

/// Request body for the classification endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a> {
    /// The message text to classify.
    pub inputs: &'a str,
}

/// One raw (label, score) entry as returned by the endpoint. Both fields
/// are optional on the wire; missing values fall back to benign/0.0.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPrediction {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl RawPrediction {
    /// Resolve the defensive defaults: unknown or missing label reads as
    /// benign, missing score as 0.0.
    pub fn into_prediction(self) -> Prediction {
        Prediction {
            label: self
                .label
                .as_deref()
                .map(ClassLabel::from_token)
                .unwrap_or(ClassLabel::Benign),
            score: self.score.unwrap_or(0.0),
        }
    }
}

/// Parse a full endpoint response body into the top prediction.
///
/// An empty array is not an error — it resolves to the benign default.
/// A body that is not a JSON array of objects is malformed.
pub fn top_prediction(body: &str) -> VigilResult<Prediction> {
    let entries: Vec<RawPrediction> =
        serde_json::from_str(body).map_err(|e| InferenceError::MalformedResponse {
            reason: e.to_string(),
        })?;

    Ok(entries
        .into_iter()
        .next()
        .map(RawPrediction::into_prediction)
        .unwrap_or_else(Prediction::benign_default))
}
