use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk tier derived from which keyword tier matched, not from the
/// override outcome or the model's own confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Likely delivery channel, inferred from the message text — never asserted
/// by the caller. Serialized exactly as the dashboard expects: "email" / "SMS".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceChannel {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "SMS")]
    Sms,
}

impl SourceChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "SMS",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "email" => Some(Self::Email),
            "SMS" => Some(Self::Sms),
            _ => None,
        }
    }
}

/// Recommended action, derived from severity alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Report to authorities")]
    ReportToAuthorities,
    #[serde(rename = "Ignore or delete")]
    IgnoreOrDelete,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReportToAuthorities => "Report to authorities",
            Self::IgnoreOrDelete => "Ignore or delete",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Report to authorities" => Some(Self::ReportToAuthorities),
            "Ignore or delete" => Some(Self::IgnoreOrDelete),
            _ => None,
        }
    }
}

/// The sole persisted entity: one immutable row per classification request.
///
/// Created exactly once by the relay after the verdict engine runs, read
/// many times by the reader. There is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    /// UUID v4, generated at creation, never reused.
    pub id: String,
    /// Original input text, immutable.
    pub message: String,
    /// Verdict text produced by the verdict engine.
    pub analysis: String,
    pub severity: Severity,
    pub source: SourceChannel,
    pub recommendation: Recommendation,
    /// Free-text explanation of how the verdict was reached.
    pub agent_decision: String,
    /// Creation time, set exactly once at write time.
    pub timestamp: DateTime<Utc>,
}

impl AuditRecord {
    /// Assemble a record with a fresh UUID and the current UTC timestamp.
    pub fn create(
        message: String,
        analysis: String,
        severity: Severity,
        source: SourceChannel,
        recommendation: Recommendation,
        agent_decision: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            message,
            analysis,
            severity,
            source,
            recommendation,
            agent_decision,
            timestamp: Utc::now(),
        }
    }
}

/// Identity equality: two records are equal if they have the same ID.
/// A record's identity is its UUID, not its content.
impl PartialEq for AuditRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
