//! Language detector configuration.

use serde::{Deserialize, Serialize};

/// Keyword selecting every language the classifier knows.
const ALL_LANGUAGES: &str = "all";

/// Which languages the detector chooses between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// ISO 639-1 codes, or `["all"]`.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

/// Languages common in Malaysian news plus major world languages.
fn default_languages() -> Vec<String> {
    [
        "en", "ms", "id", "zh", "ta", "tl", "hi", "ar", "ja", "ko", "th", "vi", "fr", "de", "es",
        "pt", "it", "nl",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
        }
    }
}

impl LanguageConfig {
    /// Restrict detection to the given codes.
    pub fn with_languages<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether every supported language should be loaded.
    pub fn uses_all(&self) -> bool {
        self.languages
            .iter()
            .any(|l| l.trim().eq_ignore_ascii_case(ALL_LANGUAGES))
    }

    /// Check if this is the default config.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_includes_english_and_malay() {
        let config = LanguageConfig::default();
        assert!(config.languages.iter().any(|l| l == "en"));
        assert!(config.languages.iter().any(|l| l == "ms"));
        assert!(!config.uses_all());
    }

    #[test]
    fn test_all_keyword() {
        let config = LanguageConfig::with_languages(["ALL"]);
        assert!(config.uses_all());
    }

    #[test]
    fn test_deserialize_missing_field_uses_defaults() {
        let config: LanguageConfig = serde_json::from_str("{}").unwrap();
        assert!(config.is_default());
    }
}
