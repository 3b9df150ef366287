//! # vigil-verdict
//!
//! The verdict engine: deterministic post-processing that turns a raw
//! (label, score) pair plus the original message into an actionable
//! security verdict. Pure functions only — no I/O, no shared state.

pub mod engine;
pub mod rules;

pub use engine::{Verdict, VerdictEngine};
