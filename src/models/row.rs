//! Article rows and the dataset that holds them.

use serde::{Deserialize, Serialize};

use super::Sentiment;

/// Column holding the article headline.
pub const TITLE_COLUMN: &str = "Title";
/// Column holding the article body.
pub const CONTENT_COLUMN: &str = "Content";
/// Title reported when the dataset has none.
pub const MISSING_TITLE: &str = "N/A";
/// Language reported for rows whose scoring failed.
pub const FAILED_LANGUAGE: &str = "Unknown";

/// Cleaned text and detected language for one source column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedText {
    pub clean: String,
    pub language: String,
}

/// One article as read from the input table.
///
/// `fields` keeps every original cell so the full output can echo the
/// input columns; `title` and `content` are `None` for missing cells.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Zero-based position in the input.
    pub index: usize,
    pub fields: Vec<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub title_derived: Option<DerivedText>,
    pub content_derived: Option<DerivedText>,
    pub sentiment: Option<Sentiment>,
}

impl Row {
    /// Cleaned content, or empty when preprocessing has not run.
    pub fn clean_content(&self) -> &str {
        self.content_derived
            .as_ref()
            .map(|d| d.clean.as_str())
            .unwrap_or("")
    }

    /// Language detected from the content column.
    pub fn language(&self) -> Option<&str> {
        self.content_derived.as_ref().map(|d| d.language.as_str())
    }

    /// Title for display, `N/A` when missing.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(MISSING_TITLE)
    }
}

/// An ordered collection of rows sharing one header.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Position of a column by exact (trimmed) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Per-row result reported to callers and written to the summary output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_defaults() {
        let row = Row::default();
        assert_eq!(row.display_title(), "N/A");
        assert_eq!(row.clean_content(), "");
        assert!(row.language().is_none());
    }

    #[test]
    fn test_analyzed_row_json_field_names() {
        let row = AnalyzedRow {
            title: "Headline".to_string(),
            content: "body".to_string(),
            language: "en".to_string(),
            sentiment: Sentiment::Positive,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Title": "Headline",
                "Content": "body",
                "Language": "en",
                "Sentiment": "positive"
            })
        );
    }

    #[test]
    fn test_column_lookup() {
        let dataset = Dataset {
            headers: vec!["Title".to_string(), "Content".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(dataset.column_index("Content"), Some(1));
        assert!(!dataset.has_column("content"));
        assert!(dataset.is_empty());
    }
}
