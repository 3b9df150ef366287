//! Fixed keyword decision table driving severity, source inference, and
//! the override hit count. Hand-coded and small; not a rule engine.

use vigil_core::{Severity, SourceChannel};

/// Risk keywords checked for the override hit count, in display order.
/// Hit lists preserve this order when joined into the explanation text.
pub const RISK_KEYWORDS: [&str; 7] = [
    "bank account",
    "update now",
    "verify",
    "click here",
    "urgent",
    "suspend",
    "claim prize",
];

/// Keywords that place a message in the high severity tier.
pub const HIGH_SEVERITY_KEYWORDS: [&str; 3] = ["bank account", "update now", "urgent"];

/// Keywords that place a message in the medium severity tier.
pub const MEDIUM_SEVERITY_KEYWORDS: [&str; 2] = ["click here", "verify"];

/// Substrings marking a message as likely email-borne. Bare "account"
/// counts here, independent of the "bank account" risk keyword.
pub const EMAIL_MARKERS: [&str; 2] = ["verify", "account"];

/// Risk keywords present in the (already lowercased) message, in table
/// order, each counted at most once.
pub fn keyword_hits(lowered: &str) -> Vec<&'static str> {
    RISK_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lowered.contains(kw))
        .collect()
}

/// Severity tier for the message. First tier wins: high beats medium
/// beats low, regardless of how many keywords matched overall.
pub fn severity_for(lowered: &str) -> Severity {
    if HIGH_SEVERITY_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Severity::High
    } else if MEDIUM_SEVERITY_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Infer the likely delivery channel from the message text.
pub fn source_for(lowered: &str) -> SourceChannel {
    if EMAIL_MARKERS.iter().any(|kw| lowered.contains(kw)) {
        SourceChannel::Email
    } else {
        SourceChannel::Sms
    }
}
