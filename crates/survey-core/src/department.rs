//! Department-level aggregation.
//!
//! Two independent paths share the same output shape: grouping raw responses
//! by department, and reading a pre-aggregated department-score matrix. Both
//! compare each department against an overall baseline that was computed
//! before this stage ran.

use std::collections::BTreeMap;

use tracing::debug;

use survey_model::{
    AnalysisResult, DepartmentAnalysis, DepartmentQuestion, DepartmentScoreData, Question,
    SurveyResponse,
};

use crate::stats::{mean, round2};
use crate::text_utils::natural_cmp;

/// Department names present in the responses, in natural order.
///
/// The empty string is a valid department: respondents without department
/// information form their own group.
pub fn departments(responses: &[SurveyResponse]) -> Vec<String> {
    let mut names: Vec<String> = responses
        .iter()
        .map(|response| response.department.clone())
        .collect();
    names.sort_by(|a, b| natural_cmp(a, b));
    names.dedup();
    names
}

/// Raw-response path: per department x question, the mean over that
/// department's non-missing answers and its delta against the overall mean
/// already computed in `results`.
///
/// Department x question pairs with no answers produce no entry.
pub fn department_analyze(
    responses: &[SurveyResponse],
    questions: &[Question],
    results: &[AnalysisResult],
) -> Vec<DepartmentAnalysis> {
    let overall_means: BTreeMap<&str, f64> = results
        .iter()
        .map(|result| (result.question_key.as_str(), result.mean))
        .collect();
    let names = departments(responses);
    let mut analyses = Vec::new();
    for name in &names {
        let members: Vec<&SurveyResponse> = responses
            .iter()
            .filter(|response| response.department == *name)
            .collect();
        for question in questions {
            let values: Vec<f64> = members
                .iter()
                .filter_map(|response| response.answer(&question.key))
                .collect();
            if values.is_empty() {
                continue;
            }
            let Some(overall) = overall_means.get(question.key.as_str()) else {
                continue;
            };
            let dept_mean = round2(mean(&values));
            analyses.push(DepartmentAnalysis {
                department: name.clone(),
                question_key: question.key.clone(),
                mean: dept_mean,
                diff_from_overall: round2(dept_mean - overall),
            });
        }
    }
    debug!(departments = names.len(), entries = analyses.len(), "department aggregation complete");
    analyses
}

/// Overall baseline for one matrix question: the detected overall column's
/// score when present, otherwise the arithmetic mean of the regular
/// departments' scores.
pub fn matrix_overall_mean(question: &DepartmentQuestion, data: &DepartmentScoreData) -> f64 {
    if !data.overall_department.is_empty() {
        if let Some(score) = question.scores.get(&data.overall_department) {
            return *score;
        }
    }
    let values: Vec<f64> = data
        .regular_departments()
        .filter_map(|name| question.scores.get(name).copied())
        .collect();
    round2(mean(&values))
}

/// Matrix path: the matrix already supplies one score per department x
/// question, so each entry is that score and its delta against the overall
/// baseline. The overall column itself produces no entry.
pub fn department_matrix_analyze(data: &DepartmentScoreData) -> Vec<DepartmentAnalysis> {
    let mut analyses = Vec::new();
    for question in &data.questions {
        let overall = matrix_overall_mean(question, data);
        let key = question_key(question);
        for name in data.regular_departments() {
            let Some(score) = question.scores.get(name) else {
                continue;
            };
            analyses.push(DepartmentAnalysis {
                department: name.clone(),
                question_key: key.clone(),
                mean: *score,
                diff_from_overall: round2(score - overall),
            });
        }
    }
    analyses
}

fn question_key(question: &DepartmentQuestion) -> String {
    match question.number {
        Some(number) => format!("Q{number}. {}", question.label),
        None => question.label.clone(),
    }
}
