//! CSV dataset input and result output.

mod reader;
mod writer;

use thiserror::Error;

pub use reader::{load_bytes, load_path, load_reader};
pub use writer::{full_headers, write_full, write_results, PREDICTED_SENTIMENT_COLUMN};

/// Errors reading or writing datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No columns to parse from file")]
    Empty,

    #[error("Expected {expected} fields in line {line}, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
