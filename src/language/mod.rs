//! Language identification for cleaned article text.
//!
//! Detection is delegated to a statistical classifier behind the
//! [`LanguageDetector`] trait. Callers use [`detect_language`], which maps
//! every failure to [`UNKNOWN_LANGUAGE`] instead of propagating it.

mod config;
mod lingua_backend;

use thiserror::Error;

pub use config::LanguageConfig;
pub use lingua_backend::LinguaDetector;

/// Code reported when the classifier cannot decide.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Errors from language detection backends.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("No language could be determined")]
    Undetermined,

    #[error("Unsupported language code: {0}")]
    UnsupportedCode(String),

    #[error("At least two languages are required, got {0}")]
    TooFewLanguages(usize),
}

/// A backend that maps text to an ISO 639-1 language code.
pub trait LanguageDetector: Send + Sync {
    /// Backend identifier for diagnostics.
    fn backend_id(&self) -> &str;

    /// Classify text, returning a lowercase ISO 639-1 code.
    fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

/// Detect the language of `text`, defaulting to `"unknown"` on any failure.
pub fn detect_language(detector: &dyn LanguageDetector, text: &str) -> String {
    match detector.detect(text) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!("Language detection via {} failed: {}", detector.backend_id(), e);
            UNKNOWN_LANGUAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingDetector;

    impl LanguageDetector for FailingDetector {
        fn backend_id(&self) -> &str {
            "failing"
        }

        fn detect(&self, _text: &str) -> Result<String, DetectionError> {
            Err(DetectionError::Undetermined)
        }
    }

    struct FixedDetector(&'static str);

    impl LanguageDetector for FixedDetector {
        fn backend_id(&self) -> &str {
            "fixed"
        }

        fn detect(&self, _text: &str) -> Result<String, DetectionError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_failure_defaults_to_unknown() {
        assert_eq!(detect_language(&FailingDetector, "anything"), "unknown");
    }

    #[test]
    fn test_success_passes_code_through() {
        assert_eq!(detect_language(&FixedDetector("ms"), "saya"), "ms");
    }
}
