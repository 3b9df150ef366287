use crate::errors::VigilResult;
use crate::label::ClassLabel;

/// A single (label, score) prediction from the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: ClassLabel,
    /// Model confidence in [0, 1]. Not re-validated here; the endpoint
    /// owns its own output range.
    pub score: f64,
}

impl Prediction {
    /// Defensive default used when the endpoint returns nothing usable.
    pub fn benign_default() -> Self {
        Self {
            label: ClassLabel::Benign,
            score: 0.0,
        }
    }
}

/// The remote message classifier, consumed behind this trait.
///
/// One synchronous call per message; the implementation owns transport
/// concerns (timeouts, connection reuse). Implementations must be
/// read-only and shareable across concurrent requests.
pub trait IClassifier: Send + Sync {
    /// Classify a message, returning the top prediction.
    fn classify(&self, message: &str) -> VigilResult<Prediction>;
}
