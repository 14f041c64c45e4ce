//! Lexicon-based polarity scoring for English text.

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::Sentiment;

/// Produces a compound polarity score in `[-1.0, 1.0]`.
pub trait PolarityScorer: Send + Sync {
    /// Backend identifier for diagnostics.
    fn backend_id(&self) -> &str;

    fn compound(&self, text: &str) -> f64;
}

/// VADER rule-based scorer.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderScorer {
    fn backend_id(&self) -> &str {
        "vader"
    }

    fn compound(&self, text: &str) -> f64 {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

/// Thresholds that turn a compound score into a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Scores at or above this are positive.
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,
    /// Scores at or below this are negative.
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
}

fn default_positive_threshold() -> f64 {
    0.05
}

fn default_negative_threshold() -> f64 {
    -0.05
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
        }
    }
}

impl LexiconConfig {
    /// Label a compound score.
    pub fn classify(&self, score: f64) -> Sentiment {
        if score >= self.positive_threshold {
            Sentiment::Positive
        } else if score <= self.negative_threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        let config = LexiconConfig::default();
        assert_eq!(config.classify(0.05), Sentiment::Positive);
        assert_eq!(config.classify(-0.05), Sentiment::Negative);
        assert_eq!(config.classify(0.049), Sentiment::Neutral);
        assert_eq!(config.classify(0.0), Sentiment::Neutral);
    }

    #[test]
    fn test_vader_polarity() {
        let scorer = VaderScorer::new();
        assert!(scorer.compound("I love this!") > 0.05);
        assert!(scorer.compound("this is a terrible and awful disaster") < -0.05);
    }
}
