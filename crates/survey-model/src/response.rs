use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One respondent's record.
///
/// `answers` holds only non-missing answers, keyed by question key; a missing
/// answer is simply an absent key, never a sentinel value. An empty
/// `department` means the respondent carries no department information and is
/// grouped under the unnamed department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub respondent_id: String,
    pub department: String,
    pub answers: BTreeMap<String, f64>,
}

impl SurveyResponse {
    pub fn new(respondent_id: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            respondent_id: respondent_id.into(),
            department: department.into(),
            answers: BTreeMap::new(),
        }
    }

    /// Answer for a question key, if the respondent gave one.
    pub fn answer(&self, key: &str) -> Option<f64> {
        self.answers.get(key).copied()
    }
}
