//! Blocking HTTP client for the classification endpoint.
//!
//! Constructed once at process start and shared read-only across requests;
//! the relay invokes it synchronously, one call per message.

use std::time::Duration;

use vigil_core::errors::InferenceError;
use vigil_core::{IClassifier, Prediction, RelayConfig, VigilResult};

use crate::protocol::{self, InferenceRequest};

/// How much of an error body to keep in error messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Connection settings for the endpoint client.
#[derive(Debug, Clone)]
pub struct EndpointClientConfig {
    /// Full URL of the classification endpoint.
    pub endpoint_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl From<&RelayConfig> for EndpointClientConfig {
    fn from(config: &RelayConfig) -> Self {
        Self {
            endpoint_url: config.endpoint_url.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// Client for the remote classifier.
#[derive(Debug)]
pub struct EndpointClient {
    http: reqwest::blocking::Client,
    endpoint_url: String,
}

impl EndpointClient {
    /// Build the client. Fails only if the underlying HTTP client cannot
    /// be constructed (e.g. TLS backend initialization).
    pub fn new(config: EndpointClientConfig) -> VigilResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InferenceError::RequestFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            http,
            endpoint_url: config.endpoint_url,
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

impl IClassifier for EndpointClient {
    fn classify(&self, message: &str) -> VigilResult<Prediction> {
        tracing::info!(endpoint = %self.endpoint_url, "inference: calling endpoint");

        let response = self
            .http
            .post(&self.endpoint_url)
            .json(&InferenceRequest { inputs: message })
            .send()
            .map_err(|e| InferenceError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| InferenceError::RequestFailed {
            reason: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(InferenceError::BadStatus {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            }
            .into());
        }

        let prediction = protocol::top_prediction(&body)?;
        tracing::info!(
            label = %prediction.label,
            score = prediction.score,
            "inference: response received"
        );
        Ok(prediction)
    }
}
