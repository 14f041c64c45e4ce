//! Language detection backed by the lingua n-gram models.

use lingua::{Language, LanguageDetectorBuilder};

use super::{DetectionError, LanguageConfig, LanguageDetector};

/// Detector over a fixed set of lingua languages.
///
/// Models are loaded lazily by lingua on first use, so building the
/// detector is cheap; the first detection per language is not.
pub struct LinguaDetector {
    inner: lingua::LanguageDetector,
}

impl LinguaDetector {
    /// Build a detector for the configured languages.
    pub fn from_config(config: &LanguageConfig) -> Result<Self, DetectionError> {
        let mut builder = if config.uses_all() {
            LanguageDetectorBuilder::from_all_languages()
        } else {
            let languages = config
                .languages
                .iter()
                .map(|code| language_for_code(code))
                .collect::<Result<Vec<_>, _>>()?;
            if languages.len() < 2 {
                return Err(DetectionError::TooFewLanguages(languages.len()));
            }
            LanguageDetectorBuilder::from_languages(&languages)
        };

        Ok(Self {
            inner: builder.build(),
        })
    }
}

impl LanguageDetector for LinguaDetector {
    fn backend_id(&self) -> &str {
        "lingua"
    }

    fn detect(&self, text: &str) -> Result<String, DetectionError> {
        self.inner
            .detect_language_of(text)
            .map(|language| language.iso_code_639_1().to_string())
            .ok_or(DetectionError::Undetermined)
    }
}

/// Resolve an ISO 639-1 code to a lingua language.
fn language_for_code(code: &str) -> Result<Language, DetectionError> {
    let wanted = code.trim().to_lowercase();
    Language::all()
        .into_iter()
        .find(|language| language.iso_code_639_1().to_string() == wanted)
        .ok_or(DetectionError::UnsupportedCode(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::detect_language;

    fn english_malay() -> LinguaDetector {
        LinguaDetector::from_config(&LanguageConfig::with_languages(["en", "ms"])).unwrap()
    }

    #[test]
    fn test_resolves_codes() {
        assert_eq!(language_for_code("en").unwrap(), Language::English);
        assert_eq!(language_for_code(" MS ").unwrap(), Language::Malay);
        assert!(matches!(
            language_for_code("xx"),
            Err(DetectionError::UnsupportedCode(code)) if code == "xx"
        ));
    }

    #[test]
    fn test_rejects_single_language() {
        let result = LinguaDetector::from_config(&LanguageConfig::with_languages(["en"]));
        assert!(matches!(result, Err(DetectionError::TooFewLanguages(1))));
    }

    #[test]
    fn test_detects_english_and_malay() {
        let detector = english_malay();
        assert_eq!(
            detector
                .detect("the government announced new measures to support small businesses")
                .unwrap(),
            "en"
        );
        assert_eq!(
            detector
                .detect("kerajaan negeri akan memberi bantuan kepada mangsa banjir di kampung itu")
                .unwrap(),
            "ms"
        );
    }

    #[test]
    fn test_empty_text_is_unknown() {
        let detector = english_malay();
        assert_eq!(detect_language(&detector, ""), "unknown");
    }
}
