//! Quadrant, priority, and extraction classification.
//!
//! State-free: every (mean, importance) pair in the valid domain maps to
//! exactly one quadrant, and priority is a function of quadrant and mean
//! alone. Extraction tags are independent of the quadrant; a question can be
//! an issue inside a maintain quadrant when thresholds are configured that
//! way, and that is accepted rather than guarded against.

use survey_model::{AnalysisSettings, ExtractionType, Priority, Quadrant};

/// Importance cutoff separating the improve/maintain half from
/// monitor/excess.
pub const IMPORTANCE_THRESHOLD: f64 = 0.5;

/// Quadrant from crossing importance against the scale-midpoint mean
/// threshold.
pub fn classify_quadrant(mean: f64, importance: f64, mean_threshold: f64) -> Quadrant {
    let important = importance >= IMPORTANCE_THRESHOLD;
    let satisfied = mean >= mean_threshold;
    match (important, satisfied) {
        (true, false) => Quadrant::Improve,
        (true, true) => Quadrant::Maintain,
        (false, false) => Quadrant::Monitor,
        (false, true) => Quadrant::Excess,
    }
}

/// Priority tier for a classified question.
pub fn derive_priority(quadrant: Quadrant, mean: f64, issue_threshold: f64) -> Priority {
    match quadrant {
        Quadrant::Improve => Priority::High,
        Quadrant::Monitor if mean <= issue_threshold => Priority::Medium,
        _ => Priority::Low,
    }
}

/// Threshold-based extraction tag.
pub fn extraction_type(mean: f64, settings: &AnalysisSettings) -> ExtractionType {
    if mean <= settings.issue_threshold {
        ExtractionType::Issue
    } else if mean >= settings.excellent_threshold {
        ExtractionType::Excellent
    } else {
        ExtractionType::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_table() {
        assert_eq!(classify_quadrant(2.0, 0.8, 3.0), Quadrant::Improve);
        assert_eq!(classify_quadrant(4.5, 0.8, 3.0), Quadrant::Maintain);
        assert_eq!(classify_quadrant(2.0, 0.2, 3.0), Quadrant::Monitor);
        assert_eq!(classify_quadrant(4.0, 0.2, 3.0), Quadrant::Excess);
    }

    #[test]
    fn boundary_values_go_to_the_upper_cell() {
        assert_eq!(classify_quadrant(3.0, 0.5, 3.0), Quadrant::Maintain);
    }

    #[test]
    fn priorities() {
        assert_eq!(derive_priority(Quadrant::Improve, 2.0, 3.0), Priority::High);
        assert_eq!(derive_priority(Quadrant::Monitor, 2.5, 3.0), Priority::Medium);
        assert_eq!(derive_priority(Quadrant::Monitor, 3.5, 3.0), Priority::Low);
        assert_eq!(derive_priority(Quadrant::Maintain, 2.0, 3.0), Priority::Low);
        assert_eq!(derive_priority(Quadrant::Excess, 4.5, 3.0), Priority::Low);
    }

    #[test]
    fn maintain_quadrant_is_low_priority_even_when_important() {
        let quadrant = classify_quadrant(4.5, 0.8, 3.0);
        assert_eq!(quadrant, Quadrant::Maintain);
        assert_eq!(derive_priority(quadrant, 4.5, 3.0), Priority::Low);
    }

    #[test]
    fn extraction_tags() {
        let settings = AnalysisSettings::new(3.0, 4.0, 1.0, 5.0);
        assert_eq!(extraction_type(2.67, &settings), ExtractionType::Issue);
        assert_eq!(extraction_type(4.2, &settings), ExtractionType::Excellent);
        assert_eq!(extraction_type(3.5, &settings), ExtractionType::Neutral);
    }
}
