use serde::{Deserialize, Serialize};

/// Wire token the model emits for a benign prediction.
pub const BENIGN_TOKEN: &str = "LABEL_0";

/// Wire token the model emits for a malicious prediction.
pub const MALICIOUS_TOKEN: &str = "LABEL_1";

/// The two-token label space of the upstream model, interpreted as a
/// boolean "benign or malicious".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassLabel {
    #[serde(rename = "LABEL_0")]
    Benign,
    #[serde(rename = "LABEL_1")]
    Malicious,
}

impl ClassLabel {
    /// Map a raw wire token to a label. Only the malicious token is trusted
    /// as malicious; anything else (including unknown tokens) reads as benign.
    pub fn from_token(token: &str) -> Self {
        if token == MALICIOUS_TOKEN {
            Self::Malicious
        } else {
            Self::Benign
        }
    }

    /// The wire token for this label.
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Benign => BENIGN_TOKEN,
            Self::Malicious => MALICIOUS_TOKEN,
        }
    }

    pub fn is_malicious(&self) -> bool {
        matches!(self, Self::Malicious)
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tokens_read_as_benign() {
        assert_eq!(ClassLabel::from_token("LABEL_1"), ClassLabel::Malicious);
        assert_eq!(ClassLabel::from_token("LABEL_0"), ClassLabel::Benign);
        assert_eq!(ClassLabel::from_token("LABEL_7"), ClassLabel::Benign);
        assert_eq!(ClassLabel::from_token(""), ClassLabel::Benign);
    }

    #[test]
    fn serializes_as_wire_token() {
        let json = serde_json::to_string(&ClassLabel::Malicious).unwrap();
        assert_eq!(json, "\"LABEL_1\"");
    }
}
