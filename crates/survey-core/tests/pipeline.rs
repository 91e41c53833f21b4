//! End-to-end engine tests: analysis feeding department aggregation.

use std::collections::BTreeMap;

use survey_model::{AnalysisSettings, CategoryId, Question, SurveyResponse};

use survey_core::{analyze, department_analyze, distribution};

fn question(key: &str) -> Question {
    Question {
        id: key.to_string(),
        key: key.to_string(),
        label: key.to_string(),
        number: None,
        category: CategoryId::new("other"),
        scale_min: 1.0,
        scale_max: 5.0,
    }
}

fn response(id: &str, department: &str, answers: &[(&str, f64)]) -> SurveyResponse {
    let answers: BTreeMap<String, f64> = answers
        .iter()
        .map(|(key, value)| ((*key).to_string(), *value))
        .collect();
    SurveyResponse {
        respondent_id: id.to_string(),
        department: department.to_string(),
        answers,
    }
}

#[test]
fn department_deltas_use_the_overall_mean() {
    let questions = vec![question("q1")];
    let responses = vec![
        response("R1", "Sales", &[("q1", 2.0)]),
        response("R2", "Sales", &[("q1", 3.0)]),
        response("R3", "Support", &[("q1", 5.0)]),
    ];
    let settings = AnalysisSettings::new(3.0, 4.0, 1.0, 5.0);
    let results = analyze(&responses, &questions, &settings);
    assert_eq!(results[0].mean, 3.33);

    let departments = department_analyze(&responses, &questions, &results);
    assert_eq!(departments.len(), 2);

    let sales = departments.iter().find(|d| d.department == "Sales").unwrap();
    assert_eq!(sales.mean, 2.5);
    assert_eq!(sales.diff_from_overall, -0.83);

    let support = departments.iter().find(|d| d.department == "Support").unwrap();
    assert_eq!(support.mean, 5.0);
    assert_eq!(support.diff_from_overall, 1.67);
}

#[test]
fn deltas_need_not_sum_to_zero_with_unequal_counts() {
    let questions = vec![question("q1")];
    let responses = vec![
        response("R1", "A", &[("q1", 1.0)]),
        response("R2", "A", &[("q1", 1.0)]),
        response("R3", "A", &[("q1", 1.0)]),
        response("R4", "B", &[("q1", 5.0)]),
    ];
    let settings = AnalysisSettings::new(3.0, 4.0, 1.0, 5.0);
    let results = analyze(&responses, &questions, &settings);
    let departments = department_analyze(&responses, &questions, &results);
    let sum: f64 = departments.iter().map(|d| d.diff_from_overall).sum();
    assert!(sum.abs() > 0.1);
}

#[test]
fn ungrouped_respondents_form_their_own_department() {
    let questions = vec![question("q1")];
    let responses = vec![
        response("R1", "", &[("q1", 2.0)]),
        response("R2", "Sales", &[("q1", 4.0)]),
    ];
    let settings = AnalysisSettings::new(3.0, 4.0, 1.0, 5.0);
    let results = analyze(&responses, &questions, &settings);
    let departments = department_analyze(&responses, &questions, &results);
    assert!(departments.iter().any(|d| d.department.is_empty()));
}

#[test]
fn distribution_counts_each_scale_value() {
    let responses: Vec<SurveyResponse> = [1.0, 1.0, 3.0, 5.0, 5.0, 5.0]
        .iter()
        .enumerate()
        .map(|(idx, value)| response(&format!("R{idx}"), "", &[("q1", *value)]))
        .collect();
    let buckets = distribution(&responses, "q1", 1.0, 5.0);
    let counts: Vec<(i64, usize)> = buckets.iter().map(|b| (b.value, b.count)).collect();
    assert_eq!(counts, vec![(1, 2), (2, 0), (3, 1), (4, 0), (5, 3)]);
}
