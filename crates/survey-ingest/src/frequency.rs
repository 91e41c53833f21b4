//! Pseudo-individual reconstruction of frequency-distribution tables.
//!
//! Downstream statistics expect one record per respondent, so a table of
//! per-score counts is expanded back into individual rows: each question's
//! multiset of scores is rebuilt from its counts, padded with missing
//! answers up to the largest question total, and shuffled. The shuffle makes
//! the rows behaviorally faithful without being individually accurate:
//! counts are preserved exactly, identities are invented.
//!
//! The random source is injected so tests can assert exact sequences; the
//! production entry point defaults to the thread RNG, so reruns of the same
//! input produce different pseudo-rows with identical aggregate statistics.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::canonical::{CanonicalRow, CanonicalTable, QuestionColumn, question_key};
use crate::detect::FrequencyLayout;
use crate::raw_table::{RawTable, parse_count, parse_f64};

/// Per-question counts parsed out of one table row.
#[derive(Debug, Clone)]
struct QuestionCounts {
    number: Option<u32>,
    label: String,
    /// (score value, respondent count) in score-column order.
    counts: Vec<(i64, u64)>,
    total: u64,
}

/// Expand a frequency-distribution table into a canonical per-respondent
/// table using the supplied random source.
pub fn reconstruct_frequency<R: Rng + ?Sized>(
    table: &RawTable,
    layout: &FrequencyLayout,
    rng: &mut R,
) -> CanonicalTable {
    let questions = parse_question_rows(table, layout);
    let max_total = questions.iter().map(|question| question.total).max().unwrap_or(0) as usize;

    let mut columns = Vec::with_capacity(questions.len());
    let mut answer_columns: Vec<Vec<Option<String>>> = Vec::with_capacity(questions.len());
    for (index, question) in questions.iter().enumerate() {
        let number = question.number.or(Some(index as u32 + 1));
        columns.push(QuestionColumn {
            key: question_key(number, &question.label),
            number,
            label: question.label.clone(),
        });

        let mut answers: Vec<Option<String>> = Vec::with_capacity(max_total);
        for (score, count) in &question.counts {
            for _ in 0..*count {
                answers.push(Some(score.to_string()));
            }
        }
        answers.resize(max_total, None);
        answers.shuffle(rng);
        answer_columns.push(answers);
    }

    let rows = (0..max_total)
        .map(|row_idx| CanonicalRow {
            respondent_id: format!("R{}", row_idx + 1),
            department: String::new(),
            cells: answer_columns
                .iter()
                .map(|answers| answers[row_idx].clone())
                .collect(),
        })
        .collect();

    debug!(
        questions = columns.len(),
        pseudo_respondents = max_total,
        "frequency table reconstructed"
    );
    CanonicalTable {
        respondent_column: "respondent".to_string(),
        department_column: None,
        questions: columns,
        rows,
    }
}

/// Parse the question rows below the Likert label row. Rows without a usable
/// label or without a single parsable count are skipped.
fn parse_question_rows(table: &RawTable, layout: &FrequencyLayout) -> Vec<QuestionCounts> {
    let mut questions = Vec::new();
    for row in table.rows.iter().skip(layout.label_row + 1) {
        let label = row.get(layout.label_column).map_or("", String::as_str).trim();
        if label.is_empty() {
            continue;
        }
        let number = layout
            .number_column
            .and_then(|idx| row.get(idx))
            .and_then(|cell| parse_f64(cell))
            .filter(|value| value.fract() == 0.0 && *value >= 0.0)
            .map(|value| value as u32);
        let counts: Vec<(i64, u64)> = layout
            .score_columns
            .iter()
            .map(|(score, idx)| {
                let count = row.get(*idx).and_then(|cell| parse_count(cell)).unwrap_or(0);
                (*score, count)
            })
            .collect();
        let total: u64 = counts.iter().map(|(_, count)| count).sum();
        if total == 0 {
            continue;
        }
        questions.push(QuestionCounts {
            number,
            label: label.to_string(),
            counts,
            total,
        });
    }
    questions
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use crate::detect::{TableShape, detect_shape};

    use super::*;

    fn frequency_table() -> RawTable {
        let headers = ["No", "質問", "5", "4", "3", "2", "1"];
        let rows: Vec<Vec<String>> = vec![
            vec!["", "", "そう思う", "やや思う", "どちらとも", "やや思わない", "思わない"],
            vec!["1", "仕事にやりがいを感じる", "6", "16", "23", "17", "2"],
            vec!["2", "上司との関係は良好だ", "10", "20", "20", "10", "0"],
        ]
        .into_iter()
        .map(|row| row.into_iter().map(String::from).collect())
        .collect();
        RawTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows,
        }
    }

    fn layout(table: &RawTable) -> FrequencyLayout {
        match detect_shape(table) {
            TableShape::Frequency(layout) => layout,
            TableShape::Plain(_) => panic!("expected frequency shape"),
        }
    }

    #[test]
    fn counts_are_preserved_regardless_of_shuffle_order() {
        let table = frequency_table();
        let layout = layout(&table);
        let mut rng = Pcg32::seed_from_u64(7);
        let canonical = reconstruct_frequency(&table, &layout, &mut rng);

        // Question 1 totals 64, question 2 totals 60; both padded to 64 rows.
        assert_eq!(canonical.rows.len(), 64);
        assert_eq!(canonical.questions[0].key, "Q1. 仕事にやりがいを感じる");

        let mut observed = std::collections::BTreeMap::new();
        for row in &canonical.rows {
            if let Some(value) = &row.cells[0] {
                *observed.entry(value.clone()).or_insert(0u64) += 1;
            }
        }
        let expected: std::collections::BTreeMap<String, u64> = [
            ("5".to_string(), 6),
            ("4".to_string(), 16),
            ("3".to_string(), 23),
            ("2".to_string(), 17),
            ("1".to_string(), 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(observed, expected);

        // The shorter question gets padded with 4 missing answers.
        let missing = canonical.rows.iter().filter(|row| row.cells[1].is_none()).count();
        assert_eq!(missing, 4);
    }

    #[test]
    fn seeded_reconstruction_is_deterministic() {
        let table = frequency_table();
        let layout = layout(&table);
        let mut first_rng = Pcg32::seed_from_u64(42);
        let mut second_rng = Pcg32::seed_from_u64(42);
        let first = reconstruct_frequency(&table, &layout, &mut first_rng);
        let second = reconstruct_frequency(&table, &layout, &mut second_rng);
        for (left, right) in first.rows.iter().zip(&second.rows) {
            assert_eq!(left.cells, right.cells);
        }
    }

    #[test]
    fn blank_question_rows_are_skipped() {
        let mut table = frequency_table();
        table.rows.push(vec![String::new(); table.headers.len()]);
        let layout = layout(&table);
        let mut rng = Pcg32::seed_from_u64(1);
        let canonical = reconstruct_frequency(&table, &layout, &mut rng);
        assert_eq!(canonical.questions.len(), 2);
    }
}
