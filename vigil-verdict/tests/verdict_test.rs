use vigil_core::{ClassLabel, Recommendation, Severity, SourceChannel};
use vigil_verdict::VerdictEngine;

// ── Scenario A: high-severity phishing, benign model label overridden ─────

#[test]
fn urgent_bank_account_message_overridden_to_malicious() {
    let verdict = VerdictEngine::evaluate("Urgent: verify your bank account now", ClassLabel::Benign, 0.2);

    assert_eq!(verdict.keyword_hits, vec!["bank account", "verify", "urgent"]);
    assert_eq!(verdict.severity, Severity::High);
    assert_eq!(verdict.source, SourceChannel::Email);
    assert!(verdict.overridden);
    assert_eq!(verdict.final_label, ClassLabel::Malicious);
    assert_eq!(verdict.final_score, 0.95);
    assert_eq!(verdict.recommendation, Recommendation::ReportToAuthorities);
}

#[test]
fn override_verdict_text_embeds_label_and_score() {
    let verdict = VerdictEngine::evaluate("Urgent: verify your bank account now", ClassLabel::Benign, 0.2);

    assert_eq!(
        verdict.verdict_text,
        "⚠️ Warning: This message is likely a phishing attempt. \
         Classified as 'LABEL_1' with 0.95 confidence based on risky keywords. \
         Please do not click any links and report this message to the appropriate authority."
    );
    assert!(verdict.explanation.starts_with(
        "The message contains keywords like bank account, verify, urgent, "
    ));
    assert!(verdict.explanation.contains(&verdict.verdict_text));
}

// ── Scenario B: benign small talk ─────────────────────────────────────────

#[test]
fn benign_message_passes_through_untouched() {
    let verdict = VerdictEngine::evaluate("Hey, are we still meeting at 5?", ClassLabel::Benign, 0.1);

    assert!(verdict.keyword_hits.is_empty());
    assert_eq!(verdict.severity, Severity::Low);
    assert_eq!(verdict.source, SourceChannel::Sms);
    assert!(!verdict.overridden);
    assert_eq!(verdict.final_label, ClassLabel::Benign);
    assert_eq!(verdict.final_score, 0.1);
    assert_eq!(verdict.verdict_text, "✅ This message appears safe.");
    assert_eq!(
        verdict.explanation,
        "The message did not contain known phishing patterns. \
         The agent classified it as '✅ This message appears safe.'."
    );
}

// ── Scenario C: medium severity yet still "appears safe" ──────────────────
// One hit is below the override threshold, so a benign label survives even
// though the severity tier is medium. This interaction is deliberate.

#[test]
fn single_medium_hit_does_not_override() {
    let verdict = VerdictEngine::evaluate("click here", ClassLabel::Benign, 0.3);

    assert_eq!(verdict.keyword_hits, vec!["click here"]);
    assert_eq!(verdict.severity, Severity::Medium);
    assert_eq!(verdict.source, SourceChannel::Sms);
    assert!(!verdict.overridden);
    assert_eq!(verdict.final_label, ClassLabel::Benign);
    assert_eq!(verdict.final_score, 0.3);
    assert_eq!(verdict.recommendation, Recommendation::IgnoreOrDelete);
    assert_eq!(verdict.verdict_text, "✅ This message appears safe.");
}

// ── Override paths ────────────────────────────────────────────────────────

#[test]
fn two_keyword_hits_override_a_benign_label() {
    let verdict = VerdictEngine::evaluate("verify or we suspend you", ClassLabel::Benign, 0.05);

    assert_eq!(verdict.keyword_hits, vec!["verify", "suspend"]);
    assert!(verdict.overridden);
    assert_eq!(verdict.final_label, ClassLabel::Malicious);
    assert_eq!(verdict.final_score, 0.95);
    // Two medium/unranked hits do not raise the severity tier.
    assert_eq!(verdict.severity, Severity::Medium);
    assert_eq!(verdict.recommendation, Recommendation::IgnoreOrDelete);
}

#[test]
fn malicious_label_always_sticks() {
    let verdict = VerdictEngine::evaluate("Hey, are we still meeting at 5?", ClassLabel::Malicious, 0.6);

    assert!(verdict.overridden);
    assert_eq!(verdict.final_label, ClassLabel::Malicious);
    assert_eq!(verdict.final_score, 0.95);
}

#[test]
fn confidence_floor_never_lowers_a_higher_score() {
    let verdict = VerdictEngine::evaluate("some message", ClassLabel::Malicious, 0.99);
    assert_eq!(verdict.final_score, 0.99);
}

// ── Matching details ──────────────────────────────────────────────────────

#[test]
fn matching_is_case_insensitive() {
    let verdict = VerdictEngine::evaluate("URGENT: CLAIM PRIZE", ClassLabel::Benign, 0.0);
    assert_eq!(verdict.keyword_hits, vec!["urgent", "claim prize"]);
    assert_eq!(verdict.severity, Severity::High);
}

#[test]
fn bare_account_infers_email_channel() {
    let verdict = VerdictEngine::evaluate("please check your account", ClassLabel::Benign, 0.4);
    assert_eq!(verdict.source, SourceChannel::Email);
    // "account" is an email marker but not a risk keyword on its own.
    assert!(verdict.keyword_hits.is_empty());
    assert_eq!(verdict.severity, Severity::Low);
}

#[test]
fn severity_tier_beats_hit_count() {
    // One high-tier hit outranks any number of medium-tier hits.
    let verdict = VerdictEngine::evaluate("urgent", ClassLabel::Benign, 0.1);
    assert_eq!(verdict.severity, Severity::High);
    assert_eq!(verdict.recommendation, Recommendation::ReportToAuthorities);
    // A single high-tier hit still does not override a benign label.
    assert!(!verdict.overridden);
}
