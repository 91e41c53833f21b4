//! Workbook (XLSX/XLS/ODS) ingestion via calamine. Only the first sheet is
//! read; the rest of the workbook is ignored.

use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::raw_table::{RawTable, build_table};

/// Read the first worksheet of a workbook into a [`RawTable`].
pub fn read_workbook_table(path: &Path) -> Result<RawTable> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_vec();
    let Some(first_sheet) = sheet_names.first() else {
        return Err(IngestError::NoSheets);
    };
    debug!(sheet = %first_sheet, "reading first worksheet");
    let range = workbook.worksheet_range(first_sheet)?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(cells);
    }
    build_table(raw_rows)
}

/// Render a workbook cell as the string the CSV path would have produced.
/// Integral floats lose their trailing `.0` so score headers like `5` match
/// the CSV representation.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.trim().to_string(),
        Data::Float(value) => {
            if value.fract() == 0.0 && value.abs() < 1e15 {
                format!("{}", *value as i64)
            } else {
                value.to_string()
            }
        }
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => {
            if *value {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }
        Data::DateTime(value) => value.as_f64().to_string(),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::Error(error) => format!("{error:?}"),
    }
}

/// Read a survey table from a path, dispatching on the file extension.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => crate::raw_table::read_csv_table(path),
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => read_workbook_table(path),
        other => Err(IngestError::UnsupportedExtension(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_render_without_decimals() {
        assert_eq!(cell_to_string(&Data::Float(5.0)), "5");
        assert_eq!(cell_to_string(&Data::Float(3.25)), "3.25");
        assert_eq!(cell_to_string(&Data::Int(4)), "4");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let error = read_table(Path::new("answers.pdf")).expect_err("unsupported");
        assert!(matches!(error, IngestError::UnsupportedExtension(ext) if ext == "pdf"));
    }
}
