//! Input shape detection.
//!
//! An ordered chain of detectors, each a pure predicate plus layout
//! extractor. The chain tries each detector in priority order and the first
//! applicable one wins; the plain per-respondent layout is the fallback and
//! never fails. The department-score matrix is deliberately absent from this
//! chain: that path is chosen explicitly by the caller, never auto-detected.

use tracing::debug;

use crate::patterns::{
    is_average_header, is_department_header, is_identifier_header, is_number_header,
};
use crate::raw_table::{RawTable, parse_f64};

/// Detected table shape plus the layout information the transformer needs.
#[derive(Debug, Clone)]
pub enum TableShape {
    Frequency(FrequencyLayout),
    Plain(PlainLayout),
}

/// Layout of a frequency-distribution table: one row per question, one
/// column per scale value holding a respondent count.
#[derive(Debug, Clone)]
pub struct FrequencyLayout {
    /// Scale value and column index, in header order.
    pub score_columns: Vec<(i64, usize)>,
    /// Column carrying the question label text.
    pub label_column: usize,
    /// Column carrying the question number, when one was recognized.
    pub number_column: Option<usize>,
    /// Weighted-average column; parsed but not required downstream.
    pub average_column: Option<usize>,
    /// Index of the human-readable Likert label row to skip.
    pub label_row: usize,
}

/// Layout of a plain per-respondent table.
#[derive(Debug, Clone)]
pub struct PlainLayout {
    pub respondent_column: usize,
    pub department_column: Option<usize>,
    /// Every remaining column, in header order.
    pub question_columns: Vec<usize>,
}

const MIN_SCORE_COLUMNS: usize = 3;
const MIN_LABEL_LENGTH: usize = 5;

/// Run the detector chain.
pub fn detect_shape(table: &RawTable) -> TableShape {
    if let Some(layout) = detect_frequency(table) {
        debug!(score_columns = layout.score_columns.len(), "frequency-distribution table detected");
        return TableShape::Frequency(layout);
    }
    let layout = plain_layout(table);
    debug!(questions = layout.question_columns.len(), "plain per-respondent table assumed");
    TableShape::Plain(layout)
}

/// Frequency-distribution predicate: at least 3 headers that are themselves
/// integers in [1, 10], and a first data row whose cells under those headers
/// are human-readable Likert labels rather than counts.
fn detect_frequency(table: &RawTable) -> Option<FrequencyLayout> {
    let score_columns = score_columns(&table.headers);
    if score_columns.len() < MIN_SCORE_COLUMNS {
        return None;
    }
    let first_row = table.rows.first()?;
    let label_cells = score_columns
        .iter()
        .filter(|(_, idx)| {
            let cell = first_row.get(*idx).map_or("", String::as_str);
            parse_f64(cell).is_none() && cell.chars().count() > 1
        })
        .count();
    if label_cells * 2 < score_columns.len() {
        return None;
    }

    let label_row = 0;
    let number_column = table
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| !is_score_column(&score_columns, *idx))
        .find(|(_, header)| is_number_header(header))
        .map(|(idx, _)| idx);
    let average_column = table
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| !is_score_column(&score_columns, *idx))
        .find(|(_, header)| is_average_header(header))
        .map(|(idx, _)| idx);
    let label_column = find_label_column(table, &score_columns, number_column, label_row)?;

    Some(FrequencyLayout {
        score_columns,
        label_column,
        number_column,
        average_column,
        label_row,
    })
}

/// Headers whose text is an integer scale value in [1, 10].
fn score_columns(headers: &[String]) -> Vec<(i64, usize)> {
    headers
        .iter()
        .enumerate()
        .filter_map(|(idx, header)| {
            let value = header.trim().parse::<i64>().ok()?;
            (1..=10).contains(&value).then_some((value, idx))
        })
        .collect()
}

fn is_score_column(score_columns: &[(i64, usize)], idx: usize) -> bool {
    score_columns.iter().any(|(_, col)| *col == idx)
}

/// The question label column: first non-score, non-number column with a
/// non-numeric data cell longer than 5 characters.
fn find_label_column(
    table: &RawTable,
    score_columns: &[(i64, usize)],
    number_column: Option<usize>,
    label_row: usize,
) -> Option<usize> {
    (0..table.headers.len())
        .filter(|idx| !is_score_column(score_columns, *idx) && Some(*idx) != number_column)
        .find(|idx| {
            table.rows.iter().skip(label_row + 1).any(|row| {
                let cell = row.get(*idx).map_or("", String::as_str);
                parse_f64(cell).is_none() && cell.chars().count() > MIN_LABEL_LENGTH
            })
        })
}

/// Fallback layout: identifier-like header (that is not department-like) or
/// the first column as respondent id, first department-like header as the
/// department, everything else a question.
fn plain_layout(table: &RawTable) -> PlainLayout {
    let respondent_column = table
        .headers
        .iter()
        .enumerate()
        .find(|(_, header)| is_identifier_header(header) && !is_department_header(header))
        .map_or(0, |(idx, _)| idx);
    let department_column = table
        .headers
        .iter()
        .enumerate()
        .find(|(_, header)| is_department_header(header))
        .map(|(idx, _)| idx);
    let question_columns = (0..table.headers.len())
        .filter(|idx| *idx != respondent_column && Some(*idx) != department_column)
        .collect();
    PlainLayout {
        respondent_column,
        department_column,
        question_columns,
    }
}
