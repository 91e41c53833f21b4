//! Report assembly for export collaborators.
//!
//! Exporters format what the engine computed; they never re-derive
//! statistics. The JSON payload is the sole contract between the engine and
//! downstream renderers.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use survey_model::{
    AnalysisResult, AnalysisSettings, DepartmentAnalysis, DepartmentScoreData, ValidationReport,
};

const REPORT_SCHEMA: &str = "survey-analysis-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Full analysis payload written for export collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub schema: String,
    pub schema_version: u32,
    pub generated_at: String,
    pub settings: AnalysisSettings,
    pub results: Vec<AnalysisResult>,
    pub departments: Vec<DepartmentAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_matrix: Option<DepartmentScoreData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationReport>,
}

/// Assemble a report from already-computed engine outputs.
pub fn build_report(
    settings: AnalysisSettings,
    results: Vec<AnalysisResult>,
    departments: Vec<DepartmentAnalysis>,
    department_matrix: Option<DepartmentScoreData>,
    validation: Option<ValidationReport>,
) -> AnalysisReport {
    AnalysisReport {
        schema: REPORT_SCHEMA.to_string(),
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        settings,
        results,
        departments,
        department_matrix,
        validation,
    }
}

/// Write a report as pretty JSON. Returns the path it was written to.
pub fn write_report_json(path: &Path, report: &AnalysisReport) -> Result<PathBuf, ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AnalysisSettings {
        AnalysisSettings::new(3.0, 4.0, 1.0, 5.0)
    }

    #[test]
    fn report_serializes_without_optional_sections() {
        let report = build_report(settings(), vec![], vec![], None, None);
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("survey-analysis-report"));
        assert!(!json.contains("department_matrix"));
        assert!(!json.contains("validation"));
    }

    #[test]
    fn report_round_trips_through_a_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out").join("report.json");
        let report = build_report(settings(), vec![], vec![], None, None);
        let written = write_report_json(&path, &report).expect("write report");
        let text = std::fs::read_to_string(written).expect("read back");
        let round: AnalysisReport = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(round.schema_version, 1);
    }
}
