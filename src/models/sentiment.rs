//! Sentiment labels attached to analyzed rows.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentiment outcome for one row.
///
/// The lexicon scorer only ever yields `Positive`, `Negative` or `Neutral`.
/// The transformer model's label is passed through verbatim; labels it
/// shares with the lexicon collapse onto those variants, anything else is
/// kept as `Model`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    /// Language has no scorer.
    Unknown,
    /// Row had no usable text.
    Invalid,
    /// Scoring failed for this row.
    Error,
    /// Raw model label outside the lexicon vocabulary.
    Model(String),
}

impl Sentiment {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
            Self::Invalid => "Invalid",
            Self::Error => "Error",
            Self::Model(label) => label,
        }
    }

    /// Map a stored or model-produced label back to a sentiment.
    pub fn from_label(label: &str) -> Self {
        match label {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            "unknown" => Self::Unknown,
            "Invalid" => Self::Invalid,
            "Error" => Self::Error,
            other => Self::Model(other.to_string()),
        }
    }

    /// Whether a scorer actually produced this label.
    pub fn is_scored(&self) -> bool {
        matches!(
            self,
            Self::Positive | Self::Negative | Self::Neutral | Self::Model(_)
        )
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_labels_keep_their_case() {
        assert_eq!(Sentiment::Invalid.as_str(), "Invalid");
        assert_eq!(Sentiment::Error.as_str(), "Error");
        assert_eq!(Sentiment::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_model_labels_pass_through() {
        assert_eq!(Sentiment::from_label("positive"), Sentiment::Positive);
        let raw = Sentiment::from_label("POSITIVE");
        assert_eq!(raw, Sentiment::Model("POSITIVE".to_string()));
        assert_eq!(raw.to_string(), "POSITIVE");
        assert!(raw.is_scored());
        assert!(!Sentiment::Invalid.is_scored());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![Sentiment::Neutral, Sentiment::Error]).unwrap();
        assert_eq!(json, r#"["neutral","Error"]"#);
        let back: Vec<Sentiment> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Sentiment::Neutral, Sentiment::Error]);
    }
}
