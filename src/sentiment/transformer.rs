//! Transformer text classification over an HTTP inference API.
//!
//! The hosted Malay sentiment model is opaque to us: text goes in, a list
//! of `{label, score}` pairs comes back and the best label is used as-is.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::MalayModelConfig;

/// Errors from text classification backends.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Classifier is disabled")]
    Disabled,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// A model that assigns one label to a piece of text.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Backend identifier for diagnostics.
    fn backend_id(&self) -> &str;

    /// Check whether the backend can currently serve requests.
    async fn is_available(&self) -> bool;

    /// Hint shown when the backend is unavailable.
    fn availability_hint(&self) -> String;

    /// Return the top label for `text`.
    async fn classify(&self, text: &str) -> Result<String, ClassifierError>;
}

/// Inference request body.
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Pipelines answer either per input (nested) or flat.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl InferenceResponse {
    fn top_label(self) -> Option<String> {
        let scores = match self {
            Self::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(scores) => scores,
        };
        scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|s| s.label)
    }
}

/// Client for a Hugging Face style inference endpoint.
pub struct HfInferenceClassifier {
    config: MalayModelConfig,
    client: Client,
}

impl HfInferenceClassifier {
    pub fn new(config: MalayModelConfig) -> Result<Self, ClassifierError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClassifierError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &MalayModelConfig {
        &self.config
    }

    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[async_trait]
impl TextClassifier for HfInferenceClassifier {
    fn backend_id(&self) -> &str {
        "hf-inference"
    }

    async fn is_available(&self) -> bool {
        if !self.config.enabled {
            return false;
        }
        match self.authorize(self.client.get(self.model_url())).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn availability_hint(&self) -> String {
        if !self.config.enabled {
            return "Malay model disabled (set MALAY_MODEL_ENABLED=true to enable)".to_string();
        }
        let mut hint = format!("Check that {} is reachable", self.model_url());
        if self.config.api_key.is_none() {
            hint.push_str(" or set HF_API_TOKEN");
        }
        hint
    }

    async fn classify(&self, text: &str) -> Result<String, ClassifierError> {
        if !self.config.enabled {
            return Err(ClassifierError::Disabled);
        }

        let url = self.model_url();
        debug!("Classifying {} chars via {}", text.chars().count(), url);

        let resp = self
            .authorize(self.client.post(&url))
            .json(&InferenceRequest { inputs: text })
            .send()
            .await
            .map_err(|e| ClassifierError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClassifierError::Api(format!("HTTP {}: {}", status, body)));
        }

        let parsed: InferenceResponse = resp
            .json()
            .await
            .map_err(|e| ClassifierError::Parse(e.to_string()))?;

        parsed
            .top_label()
            .ok_or_else(|| ClassifierError::Parse("Empty label list".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};

    async fn spawn_model_server(response: serde_json::Value) -> String {
        let app = Router::new().route(
            "/models/test-model",
            post(move |Json(body): Json<serde_json::Value>| {
                let response = response.clone();
                async move {
                    assert!(body["inputs"].is_string());
                    Json(response)
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config_for(endpoint: &str) -> MalayModelConfig {
        MalayModelConfig::base_default()
            .with_endpoint(endpoint)
            .with_model("test-model")
    }

    #[test]
    fn test_top_label_from_either_shape() {
        let nested: InferenceResponse = serde_json::from_str(
            r#"[[{"label":"negative","score":0.1},{"label":"positive","score":0.8}]]"#,
        )
        .unwrap();
        assert_eq!(nested.top_label().as_deref(), Some("positive"));

        let flat: InferenceResponse =
            serde_json::from_str(r#"[{"label":"neutral","score":0.6},{"label":"negative","score":0.4}]"#)
                .unwrap();
        assert_eq!(flat.top_label().as_deref(), Some("neutral"));

        let empty: InferenceResponse = serde_json::from_str("[]").unwrap();
        assert!(empty.top_label().is_none());
    }

    #[tokio::test]
    async fn test_classify_against_local_server() {
        let endpoint = spawn_model_server(serde_json::json!([[
            {"label": "negative", "score": 0.05},
            {"label": "positive", "score": 0.9}
        ]]))
        .await;
        let classifier = HfInferenceClassifier::new(config_for(&endpoint)).unwrap();
        let label = classifier.classify("saya sangat gembira").await.unwrap();
        assert_eq!(label, "positive");
    }

    #[tokio::test]
    async fn test_disabled_classifier_refuses() {
        let mut config = config_for("http://127.0.0.1:9");
        config.enabled = false;
        let classifier = HfInferenceClassifier::new(config).unwrap();
        assert!(matches!(
            classifier.classify("apa khabar").await,
            Err(ClassifierError::Disabled)
        ));
        assert!(!classifier.is_available().await);
        assert!(classifier.availability_hint().contains("MALAY_MODEL_ENABLED"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let classifier = HfInferenceClassifier::new(config_for("http://127.0.0.1:9")).unwrap();
        assert!(matches!(
            classifier.classify("apa khabar").await,
            Err(ClassifierError::Connection(_))
        ));
    }
}
