//! Dataset analysis service.
//!
//! Runs clean → detect → score over every row in input order. A failing row
//! is labelled and reported, never fatal to the batch. Emits events for
//! progress tracking.

mod context;
mod types;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::dataset::DatasetError;
use crate::language::detect_language;
use crate::models::{
    AnalyzedRow, Dataset, DerivedText, Row, Sentiment, CONTENT_COLUMN, FAILED_LANGUAGE,
    TITLE_COLUMN,
};
use crate::text::{clean_text, is_blank};

pub use context::AnalysisContext;
pub use types::{discard_events, AnalysisEvent, AnalysisResult, AnalysisSummary};

/// Service for labelling datasets.
#[derive(Clone)]
pub struct AnalysisService {
    context: Arc<AnalysisContext>,
}

impl AnalysisService {
    pub fn new(context: Arc<AnalysisContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AnalysisContext {
        &self.context
    }

    /// Clean text and detect language for the `Title` and `Content` columns
    /// that exist in `dataset`.
    pub fn preprocess(&self, dataset: &mut Dataset) {
        let has_title = dataset.has_column(TITLE_COLUMN);
        let has_content = dataset.has_column(CONTENT_COLUMN);

        for row in &mut dataset.rows {
            if has_title {
                row.title_derived = Some(self.derive(row.title.as_deref()));
            }
            if has_content {
                row.content_derived = Some(self.derive(row.content.as_deref()));
            }
        }
        info!("Preprocessing complete. Rows: {}", dataset.len());
    }

    fn derive(&self, text: Option<&str>) -> DerivedText {
        let clean = clean_text(text);
        let language = detect_language(self.context.detector(), &clean);
        DerivedText { clean, language }
    }

    /// Label every row of a preprocessed dataset.
    ///
    /// Fails only when the dataset has no `Content` column.
    pub async fn analyze(
        &self,
        dataset: &mut Dataset,
        event_tx: mpsc::Sender<AnalysisEvent>,
    ) -> Result<AnalysisResult, DatasetError> {
        if !dataset.has_column(CONTENT_COLUMN) {
            return Err(DatasetError::MissingColumn(CONTENT_COLUMN.to_string()));
        }

        let _ = event_tx
            .send(AnalysisEvent::Started {
                total_rows: dataset.len(),
            })
            .await;

        let mut rows = Vec::with_capacity(dataset.len());
        let mut summary = AnalysisSummary::default();

        for row in &mut dataset.rows {
            if row.content_derived.is_none() {
                row.content_derived = Some(self.derive(row.content.as_deref()));
            }

            let analyzed = match self.label_row(row).await {
                Ok(analyzed) => {
                    let _ = event_tx
                        .send(AnalysisEvent::RowCompleted {
                            index: row.index,
                            title: analyzed.title.clone(),
                            sentiment: analyzed.sentiment.clone(),
                        })
                        .await;
                    analyzed
                }
                Err(e) => {
                    warn!("[Row {}] Error: {}", row.index, e);
                    let _ = event_tx
                        .send(AnalysisEvent::RowFailed {
                            index: row.index,
                            title: row.display_title().to_string(),
                            error: e.to_string(),
                        })
                        .await;
                    AnalyzedRow {
                        title: row.display_title().to_string(),
                        content: row.content.clone().unwrap_or_default(),
                        language: FAILED_LANGUAGE.to_string(),
                        sentiment: Sentiment::Error,
                    }
                }
            };

            row.sentiment = Some(analyzed.sentiment.clone());
            summary.record(&analyzed.sentiment);
            rows.push(analyzed);
        }

        info!(
            "Analyzed {} rows: {} scored, {} unknown, {} invalid, {} failed",
            summary.total, summary.scored, summary.unknown, summary.invalid, summary.failed
        );
        let _ = event_tx
            .send(AnalysisEvent::Finished {
                summary: summary.clone(),
            })
            .await;

        Ok(AnalysisResult { rows, summary })
    }

    /// Preprocess then analyze.
    pub async fn run(
        &self,
        dataset: &mut Dataset,
        event_tx: mpsc::Sender<AnalysisEvent>,
    ) -> Result<AnalysisResult, DatasetError> {
        self.preprocess(dataset);
        self.analyze(dataset, event_tx).await
    }

    async fn label_row(
        &self,
        row: &Row,
    ) -> Result<AnalyzedRow, crate::sentiment::ClassifierError> {
        let text = row.clean_content();
        let language = row.language().unwrap_or_default();

        let sentiment = if is_blank(text) {
            Sentiment::Invalid
        } else {
            self.context.scorer().analyze(text, language).await?
        };

        Ok(AnalyzedRow {
            title: row.display_title().to_string(),
            content: text.to_string(),
            language: language.to_string(),
            sentiment,
        })
    }
}
