use std::path::PathBuf;

use survey_core::ScaleBucket;
use survey_model::{
    AnalysisResult, DepartmentAnalysis, DepartmentScoreData, ValidationReport,
};

/// Everything the `analyze` command computed, ready for display.
#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub file: PathBuf,
    pub respondents: usize,
    pub results: Vec<AnalysisResult>,
    pub departments: Vec<DepartmentAnalysis>,
    pub show_departments: bool,
    pub validation: ValidationReport,
    pub distribution: Option<(String, Vec<ScaleBucket>)>,
    pub report_path: Option<PathBuf>,
    /// True when --fail-on-errors was set and validation found errors.
    pub gated: bool,
}

/// Everything the `departments` command computed.
#[derive(Debug)]
pub struct DepartmentsOutcome {
    pub file: PathBuf,
    pub data: DepartmentScoreData,
    pub departments: Vec<DepartmentAnalysis>,
    pub report_path: Option<PathBuf>,
}
