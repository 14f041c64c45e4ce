//! Language-routed sentiment scoring.
//!
//! English text is scored with a polarity lexicon, Malay text with a
//! transformer classifier. Every other language is labelled `unknown`.

mod config;
mod lexicon;
mod transformer;

use std::sync::Arc;

use tracing::debug;

use crate::models::Sentiment;

pub use config::MalayModelConfig;
pub use lexicon::{LexiconConfig, PolarityScorer, VaderScorer};
pub use transformer::{ClassifierError, HfInferenceClassifier, TextClassifier};

/// Language code routed to the lexicon scorer.
pub const ENGLISH: &str = "en";
/// Language code routed to the transformer classifier.
pub const MALAY: &str = "ms";

/// Routes text to the scorer for its language.
pub struct SentimentScorer {
    lexicon: Box<dyn PolarityScorer>,
    thresholds: LexiconConfig,
    malay: Arc<dyn TextClassifier>,
    max_input_chars: usize,
}

impl SentimentScorer {
    pub fn new(
        lexicon: Box<dyn PolarityScorer>,
        thresholds: LexiconConfig,
        malay: Arc<dyn TextClassifier>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            lexicon,
            thresholds,
            malay,
            max_input_chars,
        }
    }

    /// Build the default VADER + hosted model scorer from configuration.
    pub fn from_config(
        thresholds: LexiconConfig,
        malay: MalayModelConfig,
    ) -> Result<Self, ClassifierError> {
        let max_input_chars = malay.max_input_chars;
        let classifier = HfInferenceClassifier::new(malay)?;
        Ok(Self::new(
            Box::new(VaderScorer::new()),
            thresholds,
            Arc::new(classifier),
            max_input_chars,
        ))
    }

    pub fn lexicon(&self) -> &dyn PolarityScorer {
        self.lexicon.as_ref()
    }

    pub fn malay_classifier(&self) -> &Arc<dyn TextClassifier> {
        &self.malay
    }

    /// Label `text` written in `language`.
    pub async fn analyze(&self, text: &str, language: &str) -> Result<Sentiment, ClassifierError> {
        match language {
            ENGLISH => {
                let score = self.lexicon.compound(text);
                debug!("{} compound score {:.4}", self.lexicon.backend_id(), score);
                Ok(self.thresholds.classify(score))
            }
            MALAY => {
                let input = truncate_chars(text, self.max_input_chars);
                let label = self.malay.classify(input).await?;
                Ok(Sentiment::from_label(&label))
            }
            _ => Ok(Sentiment::Unknown),
        }
    }
}

/// Keep at most `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
