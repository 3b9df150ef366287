/// Errors from the remote classifier endpoint client.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("endpoint request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("endpoint returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("malformed endpoint response: {reason}")]
    MalformedResponse { reason: String },
}
