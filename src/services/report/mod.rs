//! Aggregate reports over saved result files.
//!
//! Computes the sentiment distribution, the language × sentiment breakdown
//! and per-language word frequencies from either output layout.

mod words;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::dataset::{self, DatasetError};
use crate::models::Dataset;

pub use words::top_words;

const LANGUAGE_COLUMNS: &[&str] = &["language", "Language", "Content_language"];
const SENTIMENT_COLUMNS: &[&str] = &["predicted_sentiment", "Sentiment"];
const CONTENT_COLUMNS: &[&str] = &["Content_clean", "clean_content", "Content"];

/// Colour used for labels without a dedicated one.
pub const FALLBACK_COLOR: &str = "#95a5a6";

/// Language groups that get a word list.
const WORD_GROUPS: &[(&str, &[&str])] = &[("English", &["en", "english"]), ("Malay", &["ms", "malay"])];

/// One result row reduced to what the report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub language: String,
    pub sentiment: String,
    pub content: String,
}

impl ReportEntry {
    /// Normalize raw cell values.
    pub fn new(language: &str, sentiment: &str, content: &str) -> Self {
        Self {
            language: normalize_language(language),
            sentiment: normalize_sentiment(sentiment),
            content: content.to_string(),
        }
    }
}

/// Lowercased, trimmed language code.
pub fn normalize_language(language: &str) -> String {
    language.trim().to_lowercase()
}

/// Trimmed label with the first letter upper-cased and the rest lower-cased.
pub fn normalize_sentiment(sentiment: &str) -> String {
    let mut chars = sentiment.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Display colour for a normalized sentiment label.
pub fn sentiment_color(label: &str) -> &'static str {
    match label {
        "Positive" => "#38b000",
        "Neutral" => "#6c757d",
        "Negative" => "#ef476f",
        _ => FALLBACK_COLOR,
    }
}

/// Load report entries from a results CSV in either layout.
pub fn load_entries(path: &Path) -> Result<Vec<ReportEntry>, DatasetError> {
    let dataset = dataset::load_path(path)?;
    entries_from_dataset(&dataset)
}

/// Extract report entries from a loaded results table.
pub fn entries_from_dataset(dataset: &Dataset) -> Result<Vec<ReportEntry>, DatasetError> {
    let language_idx = find_column(dataset, LANGUAGE_COLUMNS)?;
    let sentiment_idx = find_column(dataset, SENTIMENT_COLUMNS)?;
    let content_idx = CONTENT_COLUMNS.iter().find_map(|c| dataset.column_index(c));

    Ok(dataset
        .rows
        .iter()
        .map(|row| {
            let cell = |idx: usize| row.fields.get(idx).map(String::as_str).unwrap_or("");
            ReportEntry::new(
                cell(language_idx),
                cell(sentiment_idx),
                content_idx.map(cell).unwrap_or(""),
            )
        })
        .collect())
}

fn find_column(dataset: &Dataset, candidates: &[&str]) -> Result<usize, DatasetError> {
    candidates
        .iter()
        .find_map(|c| dataset.column_index(c))
        .ok_or_else(|| DatasetError::MissingColumn(candidates.join(" or ")))
}

/// Count and share of one sentiment label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentShare {
    pub label: String,
    pub count: usize,
    pub percent: f64,
    pub color: &'static str,
}

/// Sentiment counts for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageBreakdown {
    pub language: String,
    pub total: usize,
    pub counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Most frequent words for a language group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordGroup {
    pub group: String,
    pub articles: usize,
    pub words: Vec<WordCount>,
}

/// Aggregates over a result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Rows with a sentiment label
    pub total: usize,
    /// Largest share first
    pub distribution: Vec<SentimentShare>,
    /// Crosstab columns, in label order
    pub sentiments: Vec<String>,
    pub by_language: Vec<LanguageBreakdown>,
    pub word_groups: Vec<WordGroup>,
}

impl Report {
    /// Aggregate `entries`, keeping the `top` words per language group.
    ///
    /// Rows without a sentiment label are left out of the counts.
    pub fn build(entries: &[ReportEntry], top: usize) -> Self {
        let labelled: Vec<&ReportEntry> =
            entries.iter().filter(|e| !e.sentiment.is_empty()).collect();
        let total = labelled.len();

        let mut label_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut crosstab: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
        for entry in &labelled {
            *label_counts.entry(entry.sentiment.clone()).or_default() += 1;
            *crosstab
                .entry(entry.language.clone())
                .or_default()
                .entry(entry.sentiment.clone())
                .or_default() += 1;
        }

        let sentiments: Vec<String> = label_counts.keys().cloned().collect();

        let mut distribution: Vec<SentimentShare> = label_counts
            .into_iter()
            .map(|(label, count)| SentimentShare {
                color: sentiment_color(&label),
                percent: count as f64 * 100.0 / total as f64,
                label,
                count,
            })
            .collect();
        distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

        let by_language = crosstab
            .into_iter()
            .map(|(language, counts)| LanguageBreakdown {
                language,
                total: counts.values().sum(),
                counts,
            })
            .collect();

        let word_groups = WORD_GROUPS
            .iter()
            .map(|(group, codes)| {
                let texts: Vec<&str> = entries
                    .iter()
                    .filter(|e| codes.contains(&e.language.as_str()))
                    .map(|e| e.content.as_str())
                    .collect();
                WordGroup {
                    group: group.to_string(),
                    articles: texts.len(),
                    words: top_words(texts.iter().copied(), top)
                        .into_iter()
                        .map(|(word, count)| WordCount { word, count })
                        .collect(),
                }
            })
            .collect();

        Self {
            total,
            distribution,
            sentiments,
            by_language,
            word_groups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<ReportEntry> {
        vec![
            ReportEntry::new("EN", " positive ", "flood relief arrives"),
            ReportEntry::new("en", "negative", "flood damage grows"),
            ReportEntry::new("ms", "POSITIVE", "bantuan banjir tiba"),
            ReportEntry::new("fr", "unknown", "bonjour"),
        ]
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_sentiment("  nEGATIVE "), "Negative");
        assert_eq!(normalize_sentiment("Invalid"), "Invalid");
        assert_eq!(normalize_sentiment(""), "");
        assert_eq!(normalize_language(" MS "), "ms");
    }

    #[test]
    fn test_distribution_percentages_and_colors() {
        let report = Report::build(&entries(), 5);
        assert_eq!(report.total, 4);

        let first = &report.distribution[0];
        assert_eq!(first.label, "Positive");
        assert_eq!(first.count, 2);
        assert!((first.percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(first.color, "#38b000");

        let unknown = report
            .distribution
            .iter()
            .find(|s| s.label == "Unknown")
            .unwrap();
        assert_eq!(unknown.color, FALLBACK_COLOR);

        let sum: f64 = report.distribution.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_language_crosstab() {
        let report = Report::build(&entries(), 5);
        let en = report
            .by_language
            .iter()
            .find(|b| b.language == "en")
            .unwrap();
        assert_eq!(en.total, 2);
        assert_eq!(en.counts.get("Positive"), Some(&1));
        assert_eq!(en.counts.get("Negative"), Some(&1));
        assert_eq!(report.sentiments, vec!["Negative", "Positive", "Unknown"]);
    }

    #[test]
    fn test_word_groups() {
        let report = Report::build(&entries(), 1);
        let english = &report.word_groups[0];
        assert_eq!(english.group, "English");
        assert_eq!(english.articles, 2);
        assert_eq!(english.words, vec![WordCount { word: "flood".to_string(), count: 2 }]);
        assert_eq!(report.word_groups[1].articles, 1);
    }

    #[test]
    fn test_reads_summary_layout_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(
            &path,
            "\u{feff}Title,Content,Language,Sentiment\nA,good day,en,positive\nB,,unknown,Invalid\n",
        )
        .unwrap();
        let entries = load_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sentiment, "Positive");
        assert_eq!(entries[1].language, "unknown");
    }

    #[test]
    fn test_missing_sentiment_column() {
        let dataset = dataset::load_bytes(b"language,Content\nen,hi\n").unwrap();
        assert!(matches!(
            entries_from_dataset(&dataset),
            Err(DatasetError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_empty_report() {
        let report = Report::build(&[], 10);
        assert_eq!(report.total, 0);
        assert!(report.distribution.is_empty());
        assert!(report.word_groups.iter().all(|g| g.words.is_empty()));
    }
}
