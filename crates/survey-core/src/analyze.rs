//! Per-question analysis pipeline.
//!
//! The pipeline is a strict dependency chain: department aggregation and any
//! other consumer must observe a fully computed [`AnalysisResult`] set before
//! running, because overall means feed department deltas.

use tracing::debug;

use survey_model::{AnalysisResult, AnalysisSettings, Question, SurveyResponse};

use crate::quadrant::{classify_quadrant, derive_priority, extraction_type};
use crate::stats::{high_ratio, low_ratio, mean, median, pearson, round2, std_dev};

/// Overall score per respondent: the mean of that respondent's available
/// answers across all questions, skipping their own missing answers; 0 when
/// the respondent answered nothing.
pub fn overall_scores(responses: &[SurveyResponse]) -> Vec<f64> {
    responses
        .iter()
        .map(|response| {
            let answers: Vec<f64> = response.answers.values().copied().collect();
            mean(&answers)
        })
        .collect()
}

/// Importance of one question: absolute Pearson correlation between the
/// question's per-respondent scores and the respondents' overall scores.
///
/// A missing answer is substituted with 0 when building the question vector.
/// That substitution biases the correlation toward respondents with complete
/// data; it matches the established behavior of this metric, not a verified
/// statistical best practice.
pub fn importance(responses: &[SurveyResponse], key: &str, overall: &[f64]) -> f64 {
    let question_vector: Vec<f64> = responses
        .iter()
        .map(|response| response.answer(key).unwrap_or(0.0))
        .collect();
    pearson(&question_vector, overall).abs()
}

/// Compute an [`AnalysisResult`] per question.
///
/// Missing answers are excluded from all per-question statistics; the
/// importance vector is the one place missing answers appear (as 0).
pub fn analyze(
    responses: &[SurveyResponse],
    questions: &[Question],
    settings: &AnalysisSettings,
) -> Vec<AnalysisResult> {
    let overall = overall_scores(responses);
    let mean_threshold = settings.mean_threshold();
    let mut results = Vec::with_capacity(questions.len());
    for question in questions {
        let values: Vec<f64> = responses
            .iter()
            .filter_map(|response| response.answer(&question.key))
            .collect();
        let mean_value = round2(mean(&values));
        let importance_value = round2(importance(responses, &question.key, &overall));
        let quadrant = classify_quadrant(mean_value, importance_value, mean_threshold);
        results.push(AnalysisResult {
            question_key: question.key.clone(),
            label: question.label.clone(),
            category: question.category.clone(),
            mean: mean_value,
            median: median(&values),
            std_dev: round2(std_dev(&values)),
            low_ratio: round2(low_ratio(&values)),
            high_ratio: round2(high_ratio(&values)),
            importance: importance_value,
            quadrant,
            priority: derive_priority(quadrant, mean_value, settings.issue_threshold),
            extraction_type: extraction_type(mean_value, settings),
            answer_count: values.len(),
        });
    }
    debug!(questions = results.len(), respondents = responses.len(), "analysis complete");
    results
}
