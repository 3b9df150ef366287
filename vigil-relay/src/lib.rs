//! # vigil-relay
//!
//! The two request paths of the Vigil system: the classification relay
//! (normalize → classify → verdict → persist) and the audit reader,
//! composed over the collaborator traits, plus the axum HTTP ingress.

pub mod http;
pub mod payload;
pub mod reader;
pub mod relay;

pub use payload::ClassifyPayload;
pub use reader::ReaderService;
pub use relay::{ErrorEnvelope, RelayService};
