use thiserror::Error;

/// Fatal ingestion failures. Parse failures abort the current upload attempt
/// and are surfaced to the caller verbatim; no partial result is retained.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("workbook has no sheets")]
    NoSheets,
    #[error("table has no header row")]
    NoHeaderRow,
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),
}

/// Department-matrix extraction failures, one variant per violated
/// precondition.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("no question label column found: expected a text column with labels longer than 5 characters")]
    NoLabelColumn,
    #[error("no department score columns found: expected numeric columns with values in [1, 5.5]")]
    NoDepartmentColumns,
    #[error("no valid question rows found after filtering spacer rows")]
    NoValidRows,
}

pub type Result<T> = std::result::Result<T, IngestError>;
