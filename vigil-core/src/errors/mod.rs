//! Error types for the Vigil workspace: per-domain enums plus the
//! umbrella [`VigilError`] the relay maps to its response envelope.

mod inference_error;
mod store_error;

pub use inference_error::InferenceError;
pub use store_error::StoreError;

/// Umbrella error for all Vigil operations.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error("invalid request: {reason}")]
    Validation { reason: String },

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("unexpected error: {reason}")]
    Unexpected { reason: String },
}

pub type VigilResult<T> = Result<T, VigilError>;
