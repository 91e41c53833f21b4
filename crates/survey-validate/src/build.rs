//! Canonical table to typed survey construction.
//!
//! Row-level problems are never fatal: they are collected as issues against
//! the raw table with 1-based row coordinates, and the caller decides
//! whether to gate analysis on `has_errors`. Missing and out-of-range
//! answers are warnings; non-numeric answers are errors. Out-of-range
//! answers stay in the response so sloppy scales degrade visibly instead of
//! silently dropping data; non-numeric cells never become answers.

use tracing::{debug, warn};

use survey_core::CategoryRegistry;
use survey_ingest::CanonicalTable;
use survey_model::{
    AnalysisSettings, IssueSeverity, Question, RowIssue, SurveyResponse, ValidationReport,
};

/// Build typed questions and responses from a canonical table, collecting
/// validation issues along the way.
pub fn build_responses(
    table: &CanonicalTable,
    registry: &CategoryRegistry,
    settings: &AnalysisSettings,
) -> (Vec<Question>, Vec<SurveyResponse>, ValidationReport) {
    let questions: Vec<Question> = table
        .questions
        .iter()
        .enumerate()
        .map(|(idx, column)| Question {
            id: format!("q{}", idx + 1),
            key: column.key.clone(),
            label: column.label.clone(),
            number: column.number,
            category: registry.classify(&column.label),
            scale_min: settings.scale_min,
            scale_max: settings.scale_max,
        })
        .collect();

    let mut report = ValidationReport::default();
    let mut responses = Vec::with_capacity(table.rows.len());
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_number = row_idx + 1;
        let mut response = SurveyResponse::new(row.respondent_id.clone(), row.department.clone());
        for (question, cell) in questions.iter().zip(&row.cells) {
            match cell {
                None => {
                    report.push(RowIssue {
                        row: row_number,
                        column: question.key.clone(),
                        severity: IssueSeverity::Warning,
                        message: "missing answer".to_string(),
                    });
                }
                Some(raw) => match raw.trim().parse::<f64>() {
                    Err(_) => {
                        report.push(RowIssue {
                            row: row_number,
                            column: question.key.clone(),
                            severity: IssueSeverity::Error,
                            message: format!("non-numeric answer: {raw}"),
                        });
                    }
                    Ok(value) => {
                        if value < settings.scale_min || value > settings.scale_max {
                            report.push(RowIssue {
                                row: row_number,
                                column: question.key.clone(),
                                severity: IssueSeverity::Warning,
                                message: format!(
                                    "answer {value} outside scale [{}, {}]",
                                    settings.scale_min, settings.scale_max
                                ),
                            });
                        }
                        response.answers.insert(question.key.clone(), value);
                    }
                },
            }
        }
        responses.push(response);
    }

    if report.has_errors() {
        warn!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            "validation found non-numeric answers"
        );
    }
    debug!(
        questions = questions.len(),
        respondents = responses.len(),
        issues = report.issues.len(),
        "responses built"
    );
    (questions, responses, report)
}

#[cfg(test)]
mod tests {
    use survey_ingest::{CanonicalRow, QuestionColumn};
    use survey_model::CategoryId;

    use super::*;

    fn canonical() -> CanonicalTable {
        CanonicalTable {
            respondent_column: "ID".to_string(),
            department_column: Some("部署".to_string()),
            questions: vec![
                QuestionColumn {
                    key: "Q1. 仕事にやりがいを感じる".to_string(),
                    number: Some(1),
                    label: "Q1. 仕事にやりがいを感じる".to_string(),
                },
                QuestionColumn {
                    key: "Q2. 上司との関係".to_string(),
                    number: Some(2),
                    label: "Q2. 上司との関係".to_string(),
                },
            ],
            rows: vec![
                CanonicalRow {
                    respondent_id: "101".to_string(),
                    department: "営業部".to_string(),
                    cells: vec![Some("4".to_string()), None],
                },
                CanonicalRow {
                    respondent_id: "102".to_string(),
                    department: String::new(),
                    cells: vec![Some("abc".to_string()), Some("9".to_string())],
                },
            ],
        }
    }

    fn settings() -> AnalysisSettings {
        AnalysisSettings::new(3.0, 4.0, 1.0, 5.0)
    }

    #[test]
    fn issues_carry_row_and_column_coordinates() {
        let (_, _, report) = build_responses(&canonical(), &CategoryRegistry::default(), &settings());
        assert_eq!(report.warning_count(), 2);
        assert_eq!(report.error_count(), 1);

        let missing = &report.issues[0];
        assert_eq!(missing.row, 1);
        assert_eq!(missing.column, "Q2. 上司との関係");
        assert_eq!(missing.severity, IssueSeverity::Warning);

        let non_numeric = report
            .issues
            .iter()
            .find(|issue| issue.severity == IssueSeverity::Error)
            .expect("error issue");
        assert_eq!(non_numeric.row, 2);
        assert!(non_numeric.message.contains("abc"));
    }

    #[test]
    fn non_numeric_answers_are_excluded_from_responses() {
        let (_, responses, _) = build_responses(&canonical(), &CategoryRegistry::default(), &settings());
        assert_eq!(responses[1].answer("Q1. 仕事にやりがいを感じる"), None);
    }

    #[test]
    fn out_of_range_answers_are_kept_with_a_warning() {
        let (_, responses, report) =
            build_responses(&canonical(), &CategoryRegistry::default(), &settings());
        assert_eq!(responses[1].answer("Q2. 上司との関係"), Some(9.0));
        assert!(report
            .issues
            .iter()
            .any(|issue| issue.message.contains("outside scale")));
    }

    #[test]
    fn questions_are_categorized_from_labels() {
        let (questions, _, _) = build_responses(&canonical(), &CategoryRegistry::default(), &settings());
        assert_eq!(questions[0].category, CategoryId::new("work"));
        assert_eq!(questions[1].category, CategoryId::new("relations"));
        assert_eq!(questions[0].scale_min, 1.0);
        assert_eq!(questions[0].scale_max, 5.0);
    }
}
