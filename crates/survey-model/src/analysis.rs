use serde::{Deserialize, Serialize};

use crate::CategoryId;

/// Strategic quadrant derived from crossing importance against mean score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    /// High importance, low satisfaction: fix first.
    Improve,
    /// High importance, high satisfaction: keep doing this.
    Maintain,
    /// Low importance, low satisfaction: watch.
    Monitor,
    /// Low importance, high satisfaction: possibly over-invested.
    Excess,
}

/// Remediation priority tier derived from quadrant and mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Threshold-based extraction tag, independent of the quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionType {
    Issue,
    Excellent,
    Neutral,
}

/// Per-question analysis output.
///
/// `mean`, `std_dev`, `low_ratio`, `high_ratio` and `importance` are rounded
/// to 2 decimal places for display stability; `median` keeps its native
/// precision. `std_dev` is the population standard deviation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub question_key: String,
    pub label: String,
    pub category: CategoryId,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    /// Fraction of non-missing answers at or below 2.
    pub low_ratio: f64,
    /// Fraction of non-missing answers at or above 4.
    pub high_ratio: f64,
    /// Absolute Pearson correlation between this question's scores and the
    /// respondents' overall mean scores.
    pub importance: f64,
    pub quadrant: Quadrant,
    pub priority: Priority,
    pub extraction_type: ExtractionType,
    /// Number of non-missing answers that fed the statistics.
    pub answer_count: usize,
}

/// Per-department, per-question comparison against the overall mean.
///
/// Deltas need not sum to zero across departments: respondent counts per
/// department are unequal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentAnalysis {
    pub department: String,
    pub question_key: String,
    pub mean: f64,
    /// `round2(department mean - overall mean)`.
    pub diff_from_overall: f64,
}
