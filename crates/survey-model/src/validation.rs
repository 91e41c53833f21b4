use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A row-level validation issue found while building responses from the
/// canonical table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowIssue {
    /// 1-based data-row number (header row excluded).
    pub row: usize,
    /// Question key or column name the issue was found in.
    pub column: String,
    pub severity: IssueSeverity,
    pub message: String,
}

/// Aggregate validation report for one ingested table.
///
/// Issues never block downstream analysis by themselves; callers may choose
/// to gate on `has_errors` before proceeding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<RowIssue>,
}

impl ValidationReport {
    pub fn push(&mut self, issue: RowIssue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
