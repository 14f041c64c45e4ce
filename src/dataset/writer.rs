//! Result CSV output.

use std::io::Write;
use std::path::Path;

use tracing::info;

use super::DatasetError;
use crate::models::{AnalyzedRow, Dataset, Row, CONTENT_COLUMN, TITLE_COLUMN};

/// Sentiment column in the full layout.
pub const PREDICTED_SENTIMENT_COLUMN: &str = "predicted_sentiment";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write the summary layout (`Title, Content, Language, Sentiment`).
///
/// Output carries a UTF-8 BOM so spreadsheet tools pick the right encoding.
pub fn write_results(path: &Path, results: &[AnalyzedRow]) -> Result<(), DatasetError> {
    ensure_parent(path)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    if results.is_empty() {
        writer.write_record(["Title", "Content", "Language", "Sentiment"])?;
    }
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;

    info!("Wrote {} results to {}", results.len(), path.display());
    Ok(())
}

/// Header of the full layout for `dataset`.
pub fn full_headers(dataset: &Dataset) -> Vec<String> {
    let mut headers = dataset.headers.clone();
    if dataset.has_column(TITLE_COLUMN) {
        headers.push("Title_clean".to_string());
        headers.push("Title_language".to_string());
    }
    if dataset.has_column(CONTENT_COLUMN) {
        headers.push("Content_clean".to_string());
        headers.push("Content_language".to_string());
        headers.push("clean_content".to_string());
        headers.push("language".to_string());
    }
    headers.push(PREDICTED_SENTIMENT_COLUMN.to_string());
    headers
}

/// Write every input column followed by the derived columns.
///
/// An existing file at `path` is replaced.
pub fn write_full(path: &Path, dataset: &Dataset) -> Result<(), DatasetError> {
    ensure_parent(path)?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }

    let has_title = dataset.has_column(TITLE_COLUMN);
    let has_content = dataset.has_column(CONTENT_COLUMN);

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(full_headers(dataset))?;
    for row in &dataset.rows {
        writer.write_record(full_record(row, has_title, has_content))?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

fn full_record(row: &Row, has_title: bool, has_content: bool) -> Vec<String> {
    let mut record = row.fields.clone();
    if has_title {
        let derived = row.title_derived.clone().unwrap_or_default();
        record.push(derived.clean);
        record.push(derived.language);
    }
    if has_content {
        let derived = row.content_derived.clone().unwrap_or_default();
        record.push(derived.clean.clone());
        record.push(derived.language.clone());
        record.push(derived.clean);
        record.push(derived.language);
    }
    record.push(
        row.sentiment
            .as_ref()
            .map(|s| s.as_str().to_string())
            .unwrap_or_default(),
    );
    record
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::load_bytes;
    use crate::models::{DerivedText, Sentiment};

    #[test]
    fn test_write_results_has_bom_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("results.csv");
        let results = vec![AnalyzedRow {
            title: "N/A".to_string(),
            content: "great news".to_string(),
            language: "en".to_string(),
            sentiment: Sentiment::Positive,
        }];
        write_results(&path, &results).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "Title,Content,Language,Sentiment\nN/A,great news,en,positive\n"
        );
    }

    #[test]
    fn test_write_full_appends_derived_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.csv");
        std::fs::write(&path, "stale").unwrap();

        let mut dataset = load_bytes(b"Content,Source\nHello!,wire\n").unwrap();
        dataset.rows[0].content_derived = Some(DerivedText {
            clean: "hello".to_string(),
            language: "en".to_string(),
        });
        dataset.rows[0].sentiment = Some(Sentiment::Neutral);
        write_full(&path, &dataset).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Content,Source,Content_clean,Content_language,clean_content,language,predicted_sentiment")
        );
        assert_eq!(lines.next(), Some("Hello!,wire,hello,en,hello,en,neutral"));
        assert!(lines.next().is_none());
    }
}
