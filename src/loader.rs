use std::collections::HashMap;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{NormalizerError, Result};
use crate::sources::SurveySource;

/// One raw submission, keyed by canonical field name.
///
/// Only mapped columns survive the load; free-text commentary columns and
/// timestamps in the raw exports are never read. Empty cells are absent.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    values: HashMap<&'static str, String>,
}

impl RawRow {
    pub fn get(&self, field: &'static str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn set(&mut self, field: &'static str, value: &str) {
        self.values.insert(field, value.to_string());
    }
}

/// Read a raw CSV export, resolving each canonical field to its column by
/// the exact question text the questionnaire used as a header.
///
/// A mapped question missing from the header is a structural mismatch in
/// the export and fails the load up front.
pub fn load_rows(path: &Path, source: &dyn SurveySource) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut indices: Vec<(usize, &'static str)> = Vec::new();
    for &(question, canonical) in source.column_map() {
        let idx = headers
            .iter()
            .position(|h| h == question)
            .ok_or_else(|| NormalizerError::MissingColumn {
                source_id: source.source_id().to_string(),
                column: question.to_string(),
            })?;
        indices.push((idx, canonical));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = RawRow::default();
        for &(idx, canonical) in &indices {
            if let Some(value) = record.get(idx) {
                if !value.is_empty() {
                    row.values.insert(canonical, value.to_string());
                }
            }
        }
        rows.push(row);
    }

    debug!(
        source = source.source_id(),
        rows = rows.len(),
        "loaded raw rows"
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::online::OnlineSource;
    use std::io::Write;

    #[test]
    fn test_missing_mapped_header_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Timestamp,Unrelated column").unwrap();
        writeln!(file, "x,y").unwrap();

        let err = load_rows(file.path(), &OnlineSource).unwrap_err();
        match err {
            NormalizerError::MissingColumn { source_id, column } => {
                assert_eq!(source_id, "online");
                assert_eq!(column, "Do you use the Internet?");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
