use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::CategoryId;

/// One question row of a pre-aggregated department-score matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentQuestion {
    pub number: Option<u32>,
    pub label: String,
    pub category: CategoryId,
    /// One average score per department name, rounded to 2 decimals.
    pub scores: BTreeMap<String, f64>,
}

/// Pre-aggregated ingestion path: one average score per department per
/// question, with no underlying individual responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentScoreData {
    pub questions: Vec<DepartmentQuestion>,
    /// Department names in natural (numeric-aware) order.
    pub departments: Vec<String>,
    /// Name of the detected grand-total column, empty when none was found.
    pub overall_department: String,
}

impl DepartmentScoreData {
    /// Departments excluding the overall column, preserving order.
    pub fn regular_departments(&self) -> impl Iterator<Item = &String> {
        self.departments
            .iter()
            .filter(|name| self.overall_department.is_empty() || **name != self.overall_department)
    }
}
