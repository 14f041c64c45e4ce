//! Data models for news-sentiment.

mod row;
mod sentiment;

pub use row::{
    AnalyzedRow, Dataset, DerivedText, Row, CONTENT_COLUMN, FAILED_LANGUAGE, MISSING_TITLE,
    TITLE_COLUMN,
};
pub use sentiment::Sentiment;
