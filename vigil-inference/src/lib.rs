//! # vigil-inference
//!
//! Client for the remote classification endpoint: wire protocol types plus
//! a blocking HTTP client implementing [`vigil_core::IClassifier`].

pub mod client;
pub mod protocol;

pub use client::{EndpointClient, EndpointClientConfig};
