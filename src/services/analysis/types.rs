//! Analysis service types and events.

use std::collections::BTreeMap;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::models::{AnalyzedRow, Sentiment};

/// Events emitted while a dataset is analyzed.
#[derive(Debug, Clone)]
pub enum AnalysisEvent {
    /// Analysis started
    Started { total_rows: usize },
    /// Row labelled (including `Invalid` and `unknown`)
    RowCompleted {
        index: usize,
        title: String,
        sentiment: Sentiment,
    },
    /// Row scoring failed and was labelled `Error`
    RowFailed {
        index: usize,
        title: String,
        error: String,
    },
    /// Analysis complete
    Finished { summary: AnalysisSummary },
}

/// Per-outcome row counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub total: usize,
    /// Rows with a label produced by a scorer
    pub scored: usize,
    /// Rows in a language without a scorer
    pub unknown: usize,
    /// Rows with no usable content
    pub invalid: usize,
    /// Rows whose scoring failed
    pub failed: usize,
    /// Count per scored label
    pub by_label: BTreeMap<String, usize>,
}

impl AnalysisSummary {
    pub fn record(&mut self, sentiment: &Sentiment) {
        self.total += 1;
        match sentiment {
            Sentiment::Unknown => self.unknown += 1,
            Sentiment::Invalid => self.invalid += 1,
            Sentiment::Error => self.failed += 1,
            scored => {
                self.scored += 1;
                *self.by_label.entry(scored.as_str().to_string()).or_default() += 1;
            }
        }
    }
}

/// Result of analyzing a dataset.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// One entry per input row, in input order.
    pub rows: Vec<AnalyzedRow>,
    pub summary: AnalysisSummary,
}

/// A sender whose events go nowhere, for callers without a progress display.
pub fn discard_events() -> mpsc::Sender<AnalysisEvent> {
    let (tx, _) = mpsc::channel(1);
    tx
}
