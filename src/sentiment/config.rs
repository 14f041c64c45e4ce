//! Malay transformer model configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the hosted Malay sentiment model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalayModelConfig {
    /// Whether Malay rows are sent to the model at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Inference API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier on the inference server
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer token for hosted inference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Text is truncated to this many characters before the call
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,
    /// Request timeout; unset means wait indefinitely
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_model() -> String {
    "malaysia-ai/deberta-v3-xsmall-malay-sentiment".to_string()
}

fn default_max_input_chars() -> usize {
    512
}

impl Default for MalayModelConfig {
    fn default() -> Self {
        Self::base_default().with_env_overrides()
    }
}

impl MalayModelConfig {
    /// Base default without env overrides.
    pub fn base_default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            max_input_chars: default_max_input_chars(),
            timeout_secs: None,
        }
    }

    /// Check if the config equals the default (for skip_serializing_if).
    pub fn is_default(&self) -> bool {
        *self == Self::base_default()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `MALAY_MODEL_ENABLED`: "true" or "false"
    /// - `MALAY_MODEL_ENDPOINT`: inference API base URL
    /// - `MALAY_MODEL_NAME`: model identifier
    /// - `HF_API_TOKEN`: bearer token
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("MALAY_MODEL_ENABLED") {
            self.enabled = val.eq_ignore_ascii_case("true") || val == "1";
        }
        if let Ok(val) = std::env::var("MALAY_MODEL_ENDPOINT") {
            self = self.with_endpoint(&val);
        }
        if let Ok(val) = std::env::var("MALAY_MODEL_NAME") {
            self.model = val;
        }
        if let Ok(val) = std::env::var("HF_API_TOKEN") {
            if !val.is_empty() {
                self.api_key = Some(val);
            }
        }
        self
    }
}
