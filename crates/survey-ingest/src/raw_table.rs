//! Raw tabular input, exactly as parsed from CSV or a workbook sheet.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Header list plus string rows, before any shape detection.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Cell at (row, column), empty string when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Numeric value of a cell, `None` for empty or non-numeric text.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Non-negative integer value of a cell, tolerating a trailing `.0`.
pub fn parse_count(value: &str) -> Option<u64> {
    let number = parse_f64(value)?;
    if number < 0.0 || number.fract() != 0.0 {
        return None;
    }
    Some(number as u64)
}

/// Read a comma-delimited CSV file into a [`RawTable`].
///
/// The first non-blank record is the header row; fully blank rows are
/// skipped; every cell is trimmed and BOM-stripped. Short rows are padded to
/// the header width.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    build_table(raw_rows)
}

pub(crate) fn build_table(mut raw_rows: Vec<Vec<String>>) -> Result<RawTable> {
    if raw_rows.is_empty() {
        return Err(IngestError::NoHeaderRow);
    }
    let headers: Vec<String> = raw_rows
        .remove(0)
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::with_capacity(raw_rows.len());
    for record in &raw_rows {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map_or("", String::as_str);
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    debug!(columns = headers.len(), rows = rows.len(), "raw table materialized");
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_headers_and_pads_short_rows() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "\u{feff}ID,部署,Q1").expect("write");
        writeln!(file, "1,営業部,4").expect("write");
        writeln!(file, ",,").expect("write");
        writeln!(file, "2,総務部").expect("write");
        let table = read_csv_table(file.path()).expect("read csv");
        assert_eq!(table.headers, vec!["ID", "部署", "Q1"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(1, 2), "");
    }

    #[test]
    fn empty_file_is_a_parse_failure() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let error = read_csv_table(file.path()).expect_err("no header row");
        assert!(matches!(error, IngestError::NoHeaderRow));
    }

    #[test]
    fn parse_count_rejects_fractions_and_negatives() {
        assert_eq!(parse_count("16"), Some(16));
        assert_eq!(parse_count("16.0"), Some(16));
        assert_eq!(parse_count("16.5"), None);
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("agree"), None);
    }
}
