//! Department-score matrix extraction.
//!
//! This path is chosen explicitly by the caller (the department upload), so
//! unlike the detector chain it fails loudly: each missing precondition has
//! its own error so the user learns exactly which expectation the file
//! violated.

use tracing::debug;

use survey_core::{CategoryRegistry, natural_cmp, round2};
use survey_model::{DepartmentQuestion, DepartmentScoreData};

use crate::error::MatrixError;
use crate::patterns::{is_non_department_header, is_number_header, is_overall_header};
use crate::raw_table::{RawTable, parse_f64};

const MIN_LABEL_LENGTH: usize = 5;
/// Spacer rows have labels of at most this many characters.
const MAX_SPACER_LABEL_LENGTH: usize = 2;
/// A department column must have numeric values in at least this fraction of
/// the retained rows.
const MIN_PRESENCE_RATIO: f64 = 0.3;
/// Valid department averages live in [1, 5.5]; anything larger is a count
/// or percentage column.
const SCORE_RANGE: (f64, f64) = (1.0, 5.5);

/// Extract a pre-aggregated department-score matrix.
pub fn extract_department_matrix(
    table: &RawTable,
    registry: &CategoryRegistry,
) -> Result<DepartmentScoreData, MatrixError> {
    let label_column = find_label_column(table).ok_or(MatrixError::NoLabelColumn)?;
    let number_column = table
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != label_column)
        .find(|(_, header)| is_number_header(header))
        .map(|(idx, _)| idx);

    // Spacer and score-less rows are dropped before column statistics so a
    // mostly empty divider row cannot dilute the presence ratio.
    let retained: Vec<&Vec<String>> = table
        .rows
        .iter()
        .filter(|row| is_question_row(row, label_column, number_column))
        .collect();
    if retained.is_empty() {
        return Err(MatrixError::NoValidRows);
    }

    let department_columns = find_department_columns(table, &retained, label_column, number_column);
    if department_columns.is_empty() {
        return Err(MatrixError::NoDepartmentColumns);
    }

    let overall_department = department_columns
        .iter()
        .map(|idx| table.headers[*idx].as_str())
        .find(|header| is_overall_header(header))
        .unwrap_or("")
        .to_string();

    let questions = retained
        .iter()
        .map(|row| build_question(row, table, label_column, number_column, &department_columns, registry))
        .collect();

    let mut departments: Vec<String> = department_columns
        .iter()
        .map(|idx| table.headers[*idx].clone())
        .collect();
    departments.sort_by(|a, b| natural_cmp(a, b));

    debug!(
        departments = departments.len(),
        questions = retained.len(),
        overall = %overall_department,
        "department matrix extracted"
    );
    Ok(DepartmentScoreData {
        questions,
        departments,
        overall_department,
    })
}

/// First column with non-numeric text longer than 5 characters in any row.
fn find_label_column(table: &RawTable) -> Option<usize> {
    (0..table.headers.len()).find(|idx| {
        table.rows.iter().any(|row| {
            let cell = row.get(*idx).map_or("", String::as_str);
            parse_f64(cell).is_none() && cell.chars().count() > MIN_LABEL_LENGTH
        })
    })
}

/// A question row carries a label longer than the spacer limit and at least
/// one numeric cell outside the label/number columns.
fn is_question_row(row: &[String], label_column: usize, number_column: Option<usize>) -> bool {
    let label = row.get(label_column).map_or("", String::as_str).trim();
    if label.chars().count() <= MAX_SPACER_LABEL_LENGTH {
        return false;
    }
    row.iter()
        .enumerate()
        .filter(|(idx, _)| *idx != label_column && Some(*idx) != number_column)
        .any(|(_, cell)| parse_f64(cell).is_some())
}

/// Department columns: not the label or number column, header not on the
/// denylist, values numeric, present in at least 30% of retained rows, and
/// all inside the plausible score range.
fn find_department_columns(
    table: &RawTable,
    retained: &[&Vec<String>],
    label_column: usize,
    number_column: Option<usize>,
) -> Vec<usize> {
    let (score_min, score_max) = SCORE_RANGE;
    (0..table.headers.len())
        .filter(|idx| *idx != label_column && Some(*idx) != number_column)
        .filter(|idx| !is_non_department_header(&table.headers[*idx]))
        .filter(|idx| {
            let mut numeric = 0usize;
            for row in retained {
                let cell = row.get(*idx).map_or("", String::as_str);
                if cell.is_empty() {
                    continue;
                }
                match parse_f64(cell) {
                    Some(value) if (score_min..=score_max).contains(&value) => numeric += 1,
                    // A single out-of-range or textual value disqualifies
                    // the column.
                    _ => return false,
                }
            }
            numeric as f64 >= retained.len() as f64 * MIN_PRESENCE_RATIO && numeric > 0
        })
        .collect()
}

fn build_question(
    row: &[String],
    table: &RawTable,
    label_column: usize,
    number_column: Option<usize>,
    department_columns: &[usize],
    registry: &CategoryRegistry,
) -> DepartmentQuestion {
    let label = row.get(label_column).map_or("", String::as_str).trim().to_string();
    let number = number_column
        .and_then(|idx| row.get(idx))
        .and_then(|cell| parse_f64(cell))
        .filter(|value| value.fract() == 0.0 && *value >= 0.0)
        .map(|value| value as u32);
    let scores = department_columns
        .iter()
        .filter_map(|idx| {
            let value = parse_f64(row.get(*idx).map_or("", String::as_str))?;
            Some((table.headers[*idx].clone(), round2(value)))
        })
        .collect();
    DepartmentQuestion {
        number,
        label: label.clone(),
        category: registry.classify(&label),
        scores,
    }
}
