//! Analysis settings supplied by the caller.

use serde::{Deserialize, Serialize};

/// Thresholds and scale bounds for one analysis run.
///
/// The engine enforces no defaults of its own; callers must supply bounds
/// with `scale_min < scale_max`. The quadrant midpoint is derived as
/// `(scale_min + scale_max) / 2`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Means at or below this value are extracted as issues.
    pub issue_threshold: f64,
    /// Means at or above this value are extracted as excellent.
    pub excellent_threshold: f64,
    /// Inclusive lower scale bound.
    pub scale_min: f64,
    /// Inclusive upper scale bound.
    pub scale_max: f64,
}

impl AnalysisSettings {
    pub fn new(issue_threshold: f64, excellent_threshold: f64, scale_min: f64, scale_max: f64) -> Self {
        Self {
            issue_threshold,
            excellent_threshold,
            scale_min,
            scale_max,
        }
    }

    /// Midpoint of the configured scale, used as the quadrant mean threshold.
    pub fn mean_threshold(&self) -> f64 {
        (self.scale_min + self.scale_max) / 2.0
    }
}
