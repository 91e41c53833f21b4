use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a semantic question category (e.g. `"relations"`).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A survey question as known to the analysis engine.
///
/// Created in bulk when a raw-response file is ingested. The category is the
/// only field that may change afterwards (user override); everything else is
/// fixed until the session is reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique within the session.
    pub id: String,
    /// Column key as it appears in the canonical table.
    pub key: String,
    /// Human-readable label shown in reports.
    pub label: String,
    /// Question number parsed from the source, when present.
    pub number: Option<u32>,
    /// Assigned semantic category.
    pub category: CategoryId,
    /// Inclusive lower scale bound.
    pub scale_min: f64,
    /// Inclusive upper scale bound.
    pub scale_max: f64,
}
