//! Model handles shared by every analysis run.

use anyhow::Context as _;

use crate::config::Config;
use crate::language::{LanguageDetector, LinguaDetector};
use crate::sentiment::SentimentScorer;

/// Language detector and sentiment scorer, built once and shared read-only.
pub struct AnalysisContext {
    detector: Box<dyn LanguageDetector>,
    scorer: SentimentScorer,
}

impl AnalysisContext {
    pub fn new(detector: Box<dyn LanguageDetector>, scorer: SentimentScorer) -> Self {
        Self { detector, scorer }
    }

    /// Build the lingua detector, VADER lexicon and Malay model client.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let detector = LinguaDetector::from_config(&config.language)
            .context("Failed to build language detector")?;
        let scorer = SentimentScorer::from_config(config.lexicon.clone(), config.malay.clone())
            .context("Failed to build Malay model client")?;
        Ok(Self::new(Box::new(detector), scorer))
    }

    pub fn detector(&self) -> &dyn LanguageDetector {
        self.detector.as_ref()
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }
}
