//! Dataset upload and analysis endpoint.

use std::path::{Path, PathBuf};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::AppState;
use super::error_response;
use crate::dataset::{self, DatasetError};
use crate::models::{Dataset, CONTENT_COLUMN};
use crate::services::{discard_events, AnalysisService};

/// Multipart field carrying the dataset.
const FILE_FIELD: &str = "file";

/// Accept a CSV upload, label every row and save the results.
pub async fn analyze_dataset(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Failed to parse multipart upload: {}", e);
                return error_response(StatusCode::BAD_REQUEST, "Failed to read file data.");
            }
        };
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        match field.bytes().await {
            Ok(bytes) => upload = Some((filename, bytes.to_vec())),
            Err(e) => {
                tracing::warn!("Failed to read upload bytes: {}", e);
                return error_response(StatusCode::BAD_REQUEST, "Failed to read file data.");
            }
        }
    }

    let Some((filename, bytes)) = upload else {
        return error_response(StatusCode::BAD_REQUEST, "No file provided");
    };

    let upload_path = upload_path(&state.settings.upload_dir, &filename);
    if let Err(e) = save_upload(&upload_path, &bytes).await {
        tracing::error!("Failed to save upload {}: {}", upload_path.display(), e);
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Failed to save upload: {}", e),
        );
    }

    let mut dataset = match prepare_dataset(state.service.clone(), bytes).await {
        Ok(dataset) => dataset,
        Err(response) => return response,
    };

    if !dataset.has_column(CONTENT_COLUMN) {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Preprocessed data missing expected columns.",
        );
    }

    let result = match state.service.analyze(&mut dataset, discard_events()).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Analysis of {} failed: {}", upload_path.display(), e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Preprocessed data missing expected columns.",
            );
        }
    };

    let results_path = state.settings.results_path();
    if let Err(e) = dataset::write_results(&results_path, &result.rows) {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &format!("Failed to save results: {}", e),
        );
    }

    Json(serde_json::json!({
        "message": "Dataset analyzed successfully!",
        "results": result.rows,
    }))
    .into_response()
}

/// Parse the upload and run cleaning and language detection on the blocking
/// pool.
async fn prepare_dataset(
    service: AnalysisService,
    bytes: Vec<u8>,
) -> Result<Dataset, Response> {
    let prepared = tokio::task::spawn_blocking(move || {
        let mut dataset = dataset::load_bytes(&bytes)?;
        service.preprocess(&mut dataset);
        Ok::<_, DatasetError>(dataset)
    })
    .await;

    match prepared {
        Ok(Ok(dataset)) => Ok(dataset),
        Ok(Err(e)) => Err(error_response(
            StatusCode::BAD_REQUEST,
            &format!("Failed to preprocess dataset: {}", e),
        )),
        Err(e) => {
            tracing::error!("Preprocessing task failed: {}", e);
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to preprocess dataset: {}", e),
            ))
        }
    }
}

/// Where to store an upload, keeping only the final path component of the
/// client-supplied name.
fn upload_path(upload_dir: &Path, filename: &str) -> PathBuf {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty() && *n != "..")
        .map(str::to_string)
        .unwrap_or_else(|| format!("upload-{}.csv", uuid::Uuid::new_v4()));
    upload_dir.join(name)
}

async fn save_upload(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{mpsc, Arc, Mutex};
    use std::time::Duration;

    use crate::language::{DetectionError, LanguageDetector};
    use crate::sentiment::{LexiconConfig, MalayModelConfig, SentimentScorer};
    use crate::services::AnalysisContext;

    /// Answers "en" only once the test releases the gate.
    struct GatedDetector {
        gate: Mutex<mpsc::Receiver<()>>,
    }

    impl LanguageDetector for GatedDetector {
        fn backend_id(&self) -> &str {
            "gated"
        }

        fn detect(&self, _text: &str) -> Result<String, DetectionError> {
            let gate = self.gate.lock().unwrap();
            match gate.recv_timeout(Duration::from_secs(5)) {
                Ok(()) => Ok("en".to_string()),
                Err(_) => Err(DetectionError::Undetermined),
            }
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_preprocessing_leaves_runtime_free() {
        let (release, gate) = mpsc::channel();
        let scorer =
            SentimentScorer::from_config(LexiconConfig::default(), MalayModelConfig::base_default())
                .unwrap();
        let detector = GatedDetector {
            gate: Mutex::new(gate),
        };
        let service = AnalysisService::new(Arc::new(AnalysisContext::new(
            Box::new(detector),
            scorer,
        )));

        let bytes = b"Content\nhello world\n".to_vec();
        let prepared = tokio::spawn(prepare_dataset(service, bytes));
        // Let the spawned task reach the detector before releasing it.
        tokio::task::yield_now().await;
        release.send(()).unwrap();

        let Ok(dataset) = prepared.await.unwrap() else {
            panic!("preprocessing was rejected");
        };
        assert_eq!(dataset.rows[0].language(), Some("en"));
    }

    #[test]
    fn test_upload_path_strips_directories() {
        let dir = Path::new("/data/uploads");
        assert_eq!(
            upload_path(dir, "../../etc/news.csv"),
            PathBuf::from("/data/uploads/news.csv")
        );
        assert_eq!(
            upload_path(dir, "news.csv"),
            PathBuf::from("/data/uploads/news.csv")
        );
    }

    #[test]
    fn test_upload_path_generates_name_when_missing() {
        let path = upload_path(Path::new("/data/uploads"), "");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("upload-"));
        assert!(name.ends_with(".csv"));
    }
}
