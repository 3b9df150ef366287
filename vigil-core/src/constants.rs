/// Vigil system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Confidence floor applied whenever the keyword override promotes or
/// confirms a malicious verdict. Never lowers an already-higher score.
pub const OVERRIDE_CONFIDENCE_FLOOR: f64 = 0.95;

/// Number of distinct risk-keyword hits at which the override fires
/// regardless of the model's own label.
pub const OVERRIDE_HIT_THRESHOLD: usize = 2;
