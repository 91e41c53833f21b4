//! Shape-dispatching normalization into the canonical table.

use rand::Rng;

use crate::canonical::{CanonicalRow, CanonicalTable, QuestionColumn, leading_number};
use crate::detect::{PlainLayout, TableShape, detect_shape};
use crate::frequency::reconstruct_frequency;
use crate::raw_table::RawTable;

/// Normalize a raw table into the canonical per-respondent form.
///
/// Runs the detector chain and applies the matching transformer. Pure aside
/// from the RNG consumed by frequency reconstruction; never fails — the
/// plain layout absorbs anything the frequency detector rejects.
pub fn normalize<R: Rng + ?Sized>(table: &RawTable, rng: &mut R) -> CanonicalTable {
    match detect_shape(table) {
        TableShape::Frequency(layout) => reconstruct_frequency(table, &layout, rng),
        TableShape::Plain(layout) => normalize_plain(table, &layout),
    }
}

/// Reshape a plain per-respondent table: every non-id, non-department column
/// becomes a question; empty cells become missing answers.
pub fn normalize_plain(table: &RawTable, layout: &PlainLayout) -> CanonicalTable {
    let questions: Vec<QuestionColumn> = layout
        .question_columns
        .iter()
        .map(|idx| {
            let header = table.headers[*idx].clone();
            QuestionColumn {
                number: leading_number(&header),
                label: header.clone(),
                key: header,
            }
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            let respondent_id = {
                let cell = row
                    .get(layout.respondent_column)
                    .map_or("", String::as_str)
                    .trim();
                if cell.is_empty() {
                    format!("R{}", row_idx + 1)
                } else {
                    cell.to_string()
                }
            };
            let department = layout
                .department_column
                .and_then(|idx| row.get(idx))
                .map_or(String::new(), |cell| cell.trim().to_string());
            let cells = layout
                .question_columns
                .iter()
                .map(|idx| {
                    let cell = row.get(*idx).map_or("", String::as_str).trim();
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect();
            CanonicalRow {
                respondent_id,
                department,
                cells,
            }
        })
        .collect();

    CanonicalTable {
        respondent_column: table.headers[layout.respondent_column].clone(),
        department_column: layout.department_column.map(|idx| table.headers[idx].clone()),
        questions,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn plain_table_normalizes_in_place() {
        let raw = table(
            &["社員ID", "部署", "Q1. 仕事", "Q2. 環境"],
            &[&["101", "営業部", "4", ""], &["102", "", "2", "5"]],
        );
        let mut rng = Pcg32::seed_from_u64(0);
        let canonical = normalize(&raw, &mut rng);
        assert_eq!(canonical.respondent_column, "社員ID");
        assert_eq!(canonical.department_column.as_deref(), Some("部署"));
        assert_eq!(canonical.questions.len(), 2);
        assert_eq!(canonical.questions[0].number, Some(1));
        assert_eq!(canonical.rows[0].respondent_id, "101");
        assert_eq!(canonical.rows[0].cells, vec![Some("4".to_string()), None]);
        assert_eq!(canonical.rows[1].department, "");
    }

    #[test]
    fn blank_respondent_ids_are_generated() {
        let raw = table(&["ID", "Q1"], &[&["", "3"]]);
        let mut rng = Pcg32::seed_from_u64(0);
        let canonical = normalize(&raw, &mut rng);
        assert_eq!(canonical.rows[0].respondent_id, "R1");
    }
}
