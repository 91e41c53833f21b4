//! Single-session state.
//!
//! All entities live in one in-memory scope; nothing persists across
//! reloads. A new upload replaces the whole state rather than mutating it in
//! place, so there is no partial-update bookkeeping. The only post-ingest
//! mutations are category overrides and comment edits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use survey_model::{
    AnalysisResult, AnalysisSettings, CategoryId, DepartmentAnalysis, Question, SurveyResponse,
};

/// What a comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentTarget {
    Question,
    Department,
}

/// A user-editable comment attached to a question or department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub target: CommentTarget,
    pub target_id: String,
    pub text: String,
}

/// Comment storage keyed by `(target, target_id)` with upsert semantics:
/// writing to an existing key replaces the text instead of appending a
/// duplicate entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentStore {
    entries: BTreeMap<(CommentTarget, String), Comment>,
}

impl CommentStore {
    pub fn upsert(&mut self, target: CommentTarget, target_id: impl Into<String>, text: impl Into<String>) {
        let target_id = target_id.into();
        self.entries.insert(
            (target, target_id.clone()),
            Comment {
                target,
                target_id,
                text: text.into(),
            },
        );
    }

    pub fn get(&self, target: CommentTarget, target_id: &str) -> Option<&Comment> {
        self.entries.get(&(target, target_id.to_string()))
    }

    pub fn remove(&mut self, target: CommentTarget, target_id: &str) -> Option<Comment> {
        self.entries.remove(&(target, target_id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One analysis session: the normalized survey, its results, and the
/// user-mutable extras.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub questions: Vec<Question>,
    pub responses: Vec<SurveyResponse>,
    pub results: Vec<AnalysisResult>,
    pub department_results: Vec<DepartmentAnalysis>,
    pub settings: Option<AnalysisSettings>,
    pub comments: CommentStore,
}

impl Session {
    /// Replace the whole session with a freshly ingested survey. Prior
    /// results and comments are discarded, not merged.
    pub fn load(
        &mut self,
        questions: Vec<Question>,
        responses: Vec<SurveyResponse>,
        settings: AnalysisSettings,
    ) {
        *self = Self {
            questions,
            responses,
            settings: Some(settings),
            ..Self::default()
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Override the category of one question. Returns false when the key is
    /// unknown.
    pub fn set_category(&mut self, key: &str, category: CategoryId) -> bool {
        match self.questions.iter_mut().find(|question| question.key == key) {
            Some(question) => {
                question.category = category;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_replaces_existing_comment() {
        let mut store = CommentStore::default();
        store.upsert(CommentTarget::Question, "q1", "first draft");
        store.upsert(CommentTarget::Question, "q1", "edited");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(CommentTarget::Question, "q1").map(|c| c.text.as_str()), Some("edited"));
    }

    #[test]
    fn targets_do_not_collide() {
        let mut store = CommentStore::default();
        store.upsert(CommentTarget::Question, "sales", "about the question");
        store.upsert(CommentTarget::Department, "sales", "about the department");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn load_discards_previous_state() {
        let mut session = Session::default();
        session.comments.upsert(CommentTarget::Question, "q1", "note");
        session.load(vec![], vec![], AnalysisSettings::new(3.0, 4.0, 1.0, 5.0));
        assert!(session.comments.is_empty());
        assert!(session.settings.is_some());
    }

    #[test]
    fn category_override_by_key() {
        let mut session = Session::default();
        session.questions.push(Question {
            id: "1".to_string(),
            key: "q1".to_string(),
            label: "q1".to_string(),
            number: None,
            category: CategoryId::new("other"),
            scale_min: 1.0,
            scale_max: 5.0,
        });
        assert!(session.set_category("q1", CategoryId::new("work")));
        assert!(!session.set_category("missing", CategoryId::new("work")));
        assert_eq!(session.questions[0].category, CategoryId::new("work"));
    }
}
