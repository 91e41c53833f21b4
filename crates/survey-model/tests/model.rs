//! Serialization contract tests for the survey model types.

use survey_model::{
    AnalysisResult, CategoryId, DepartmentQuestion, DepartmentScoreData, ExtractionType, Priority,
    Quadrant, SurveyResponse,
};

#[test]
fn quadrant_serializes_lowercase() {
    let json = serde_json::to_string(&Quadrant::Improve).expect("serialize quadrant");
    assert_eq!(json, "\"improve\"");
    let round: Quadrant = serde_json::from_str("\"excess\"").expect("deserialize quadrant");
    assert_eq!(round, Quadrant::Excess);
}

#[test]
fn analysis_result_round_trips() {
    let result = AnalysisResult {
        question_key: "Q1. Workload".to_string(),
        label: "Workload".to_string(),
        category: CategoryId::new("work"),
        mean: 2.67,
        median: 2.0,
        std_dev: 1.7,
        low_ratio: 0.67,
        high_ratio: 0.33,
        importance: 0.8,
        quadrant: Quadrant::Improve,
        priority: Priority::High,
        extraction_type: ExtractionType::Issue,
        answer_count: 3,
    };
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: AnalysisResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round.question_key, "Q1. Workload");
    assert_eq!(round.quadrant, Quadrant::Improve);
    assert_eq!(round.extraction_type, ExtractionType::Issue);
}

#[test]
fn missing_answers_are_absent_keys() {
    let mut response = SurveyResponse::new("R1", "Sales");
    response.answers.insert("Q1".to_string(), 4.0);
    assert_eq!(response.answer("Q1"), Some(4.0));
    assert_eq!(response.answer("Q2"), None);

    let json = serde_json::to_string(&response).expect("serialize response");
    assert!(!json.contains("Q2"));
}

#[test]
fn matrix_round_trips() {
    let mut scores = std::collections::BTreeMap::new();
    scores.insert("Sales".to_string(), 3.0);
    scores.insert("Support".to_string(), 4.0);
    let data = DepartmentScoreData {
        questions: vec![DepartmentQuestion {
            number: Some(1),
            label: "Workload is reasonable".to_string(),
            category: CategoryId::new("work"),
            scores,
        }],
        departments: vec!["Sales".to_string(), "Support".to_string()],
        overall_department: String::new(),
    };
    let json = serde_json::to_string(&data).expect("serialize matrix");
    let round: DepartmentScoreData = serde_json::from_str(&json).expect("deserialize matrix");
    assert_eq!(round.questions.len(), 1);
    assert!(round.overall_department.is_empty());
}
