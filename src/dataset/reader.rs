//! CSV loading into [`Dataset`] rows.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::DatasetError;
use crate::models::{Dataset, Row, CONTENT_COLUMN, TITLE_COLUMN};

/// Load a dataset from a CSV file on disk.
pub fn load_path(path: &Path) -> Result<Dataset, DatasetError> {
    let file = std::fs::File::open(path)?;
    load_reader(file)
}

/// Load a dataset from uploaded CSV bytes.
pub fn load_bytes(bytes: &[u8]) -> Result<Dataset, DatasetError> {
    load_reader(bytes)
}

/// Load a dataset from any CSV source.
///
/// Header names are trimmed. Rows shorter than the header are padded with
/// empty cells, rows longer than it are rejected. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn load_reader<R: Read>(source: R) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|h| decode(h).trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(DatasetError::Empty);
    }
    debug!("Columns detected: {:?}", headers);

    let title_idx = headers.iter().position(|h| h == TITLE_COLUMN);
    let content_idx = headers.iter().position(|h| h == CONTENT_COLUMN);

    let mut rows = Vec::new();
    for (index, record) in reader.byte_records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(DatasetError::RaggedRow {
                line: record.position().map_or(index as u64 + 2, |p| p.line()),
                expected: headers.len(),
                found: record.len(),
            });
        }
        let mut fields: Vec<String> = record.iter().map(decode).collect();
        if fields.len() < headers.len() {
            fields.resize(headers.len(), String::new());
        }

        rows.push(Row {
            index,
            title: cell(&fields, title_idx),
            content: cell(&fields, content_idx),
            fields,
            ..Row::default()
        });
    }

    Ok(Dataset { headers, rows })
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Empty cells count as missing values.
fn cell(fields: &[String], idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| fields.get(i))
        .filter(|value| !value.is_empty())
        .cloned()
}
