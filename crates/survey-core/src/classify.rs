//! Keyword-based question categorization.
//!
//! The registry is an explicit configuration value passed into callers, not
//! a module-level table, so alternative keyword sets can be supplied and
//! tested independently. Matching is order-dependent: the first category
//! whose keyword list hits a substring of the lowercased label wins.

use serde::{Deserialize, Serialize};

use survey_model::CategoryId;

/// One semantic category with its ordered keyword list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    pub keywords: Vec<String>,
}

/// Ordered category table plus the fallback id for unmatched labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRegistry {
    pub categories: Vec<Category>,
    pub fallback: CategoryId,
}

impl CategoryRegistry {
    /// Category id for a question label: first category with a substring
    /// match against the lowercased label, else the fallback.
    pub fn classify(&self, label: &str) -> CategoryId {
        let needle = label.to_lowercase();
        for category in &self.categories {
            if category
                .keywords
                .iter()
                .any(|keyword| needle.contains(keyword.as_str()))
            {
                return category.id.clone();
            }
        }
        self.fallback.clone()
    }

    pub fn label_for(&self, id: &CategoryId) -> Option<&str> {
        self.categories
            .iter()
            .find(|category| category.id == *id)
            .map(|category| category.label.as_str())
    }
}

fn category(id: &str, label: &str, keywords: &[&str]) -> Category {
    Category {
        id: CategoryId::new(id),
        label: label.to_string(),
        keywords: keywords.iter().map(|keyword| (*keyword).to_string()).collect(),
    }
}

impl Default for CategoryRegistry {
    /// Fixed keyword table checked in this order. Keywords are lowercase;
    /// labels are lowercased before matching.
    fn default() -> Self {
        Self {
            categories: vec![
                category(
                    "work",
                    "仕事内容・やりがい",
                    &["仕事", "業務", "やりがい", "裁量", "work", "job", "task"],
                ),
                category(
                    "relations",
                    "人間関係",
                    &[
                        "上司",
                        "同僚",
                        "関係",
                        "人間",
                        "コミュニケーション",
                        "relationship",
                        "colleague",
                        "supervisor",
                        "communication",
                    ],
                ),
                category(
                    "environment",
                    "職場環境",
                    &["環境", "職場", "設備", "残業", "勤務", "environment", "workplace", "overtime"],
                ),
                category(
                    "compensation",
                    "評価・処遇",
                    &["給与", "評価", "待遇", "報酬", "昇進", "salary", "pay", "compensation", "promotion"],
                ),
                category(
                    "growth",
                    "成長・キャリア",
                    &["成長", "研修", "キャリア", "教育", "スキル", "growth", "training", "career", "skill"],
                ),
                category(
                    "management",
                    "経営・組織",
                    &["経営", "会社", "方針", "理念", "組織", "management", "company", "vision", "strategy"],
                ),
            ],
            fallback: CategoryId::new("other"),
        }
    }
}
