//! VerdictEngine — evaluates one message against the raw model output.

use vigil_core::constants::{OVERRIDE_CONFIDENCE_FLOOR, OVERRIDE_HIT_THRESHOLD};
use vigil_core::{ClassLabel, Recommendation, Severity, SourceChannel};

use crate::rules;

/// The full output of one evaluation.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub severity: Severity,
    pub source: SourceChannel,
    pub recommendation: Recommendation,
    /// Human-readable determination, embedded verbatim in the audit record.
    pub verdict_text: String,
    /// Explanation sentence referencing the verdict text.
    pub explanation: String,
    pub final_label: ClassLabel,
    pub final_score: f64,
    /// Whether the override promoted or confirmed a malicious verdict.
    pub overridden: bool,
    /// Risk keywords found in the message, in table order.
    pub keyword_hits: Vec<&'static str>,
}

/// Engine that derives an actionable verdict from a raw prediction.
pub struct VerdictEngine;

impl VerdictEngine {
    /// Evaluate one message. Total over any text and any label/score —
    /// never fails. Empty-message rejection is the caller's concern.
    pub fn evaluate(message: &str, raw_label: ClassLabel, raw_score: f64) -> Verdict {
        let lowered = message.to_lowercase();

        let keyword_hits = rules::keyword_hits(&lowered);
        let severity = rules::severity_for(&lowered);
        let source = rules::source_for(&lowered);

        // Recommendation tracks severity alone, not the override outcome.
        let recommendation = if severity == Severity::High {
            Recommendation::ReportToAuthorities
        } else {
            Recommendation::IgnoreOrDelete
        };

        // A malicious model label always sticks; a benign one is overridden
        // by keyword density alone once two distinct keywords hit.
        let overridden = raw_label.is_malicious() || keyword_hits.len() >= OVERRIDE_HIT_THRESHOLD;
        let (final_label, final_score) = if overridden {
            (ClassLabel::Malicious, raw_score.max(OVERRIDE_CONFIDENCE_FLOOR))
        } else {
            (raw_label, raw_score)
        };

        let verdict_text = if overridden {
            format!(
                "⚠️ Warning: This message is likely a phishing attempt. \
                 Classified as '{final_label}' with {final_score:.2} confidence based on risky keywords. \
                 Please do not click any links and report this message to the appropriate authority."
            )
        } else {
            "✅ This message appears safe.".to_string()
        };

        let explanation = if keyword_hits.is_empty() {
            format!(
                "The message did not contain known phishing patterns. \
                 The agent classified it as '{verdict_text}'."
            )
        } else {
            format!(
                "The message contains keywords like {}, which are commonly used in phishing attempts. \
                 Based on this, the agent classified it as '{verdict_text}'.",
                keyword_hits.join(", ")
            )
        };

        Verdict {
            severity,
            source,
            recommendation,
            verdict_text,
            explanation,
            final_label,
            final_score,
            overridden,
            keyword_hits,
        }
    }
}
