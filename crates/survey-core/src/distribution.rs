//! Response-count histogram for a single question.

use serde::{Deserialize, Serialize};

use survey_model::SurveyResponse;

/// One histogram bucket: a scale value and how many respondents chose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleBucket {
    pub value: i64,
    pub count: usize,
}

/// One zero-initialized bucket per integer value in `[scale_min, scale_max]`,
/// incremented for each respondent whose answer matches the bucket value.
/// Missing, fractional, and out-of-range answers are silently excluded; they
/// never land in any bucket.
pub fn distribution(
    responses: &[SurveyResponse],
    key: &str,
    scale_min: f64,
    scale_max: f64,
) -> Vec<ScaleBucket> {
    let low = scale_min.ceil() as i64;
    let high = scale_max.floor() as i64;
    let mut buckets: Vec<ScaleBucket> = (low..=high)
        .map(|value| ScaleBucket { value, count: 0 })
        .collect();
    for response in responses {
        let Some(answer) = response.answer(key) else {
            continue;
        };
        if answer.fract() != 0.0 {
            continue;
        }
        let value = answer as i64;
        if value < low || value > high {
            continue;
        }
        buckets[(value - low) as usize].count += 1;
    }
    buckets
}
