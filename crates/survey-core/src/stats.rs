//! Descriptive statistics over answer sets.
//!
//! All functions return neutral defaults (0) on degenerate input instead of
//! NaN: empty sets, single-element sets, and zero-variance vectors are
//! expected in real survey data and must not poison downstream results.

/// Round to 2 decimal places for display stability.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean; 0 for an empty set.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median at native precision; middle element for odd lengths, average of the
/// two middle elements for even lengths; 0 for an empty set.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Population standard deviation (divide by N, not N-1); 0 when N <= 1.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let avg = mean(values);
    let sum_sq: f64 = values.iter().map(|value| (value - avg).powi(2)).sum();
    (sum_sq / values.len() as f64).sqrt()
}

/// Fraction of answers at or below the low threshold (2); 0 when empty.
pub fn low_ratio(values: &[f64]) -> f64 {
    threshold_ratio(values, |value| value <= 2.0)
}

/// Fraction of answers at or above the high threshold (4); 0 when empty.
pub fn high_ratio(values: &[f64]) -> f64 {
    threshold_ratio(values, |value| value >= 4.0)
}

fn threshold_ratio(values: &[f64], predicate: impl Fn(f64) -> bool) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let matching = values.iter().filter(|value| predicate(**value)).count();
    matching as f64 / values.len() as f64
}

/// Pearson correlation coefficient.
///
/// Returns 0 when fewer than 2 pairs exist or when either vector has zero
/// variance. Vectors must have equal length.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }
    let mean_x = mean(&x[..n]);
    let mean_y = mean(&y[..n]);
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for idx in 0..n {
        let dx = x[idx] - mean_x;
        let dy = y[idx] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn std_dev_degenerate_cases() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[4.2]), 0.0);
    }

    #[test]
    fn std_dev_is_population() {
        // Variance of [2, 4] around mean 3 is ((-1)^2 + 1^2) / 2 = 1.
        assert_eq!(std_dev(&[2.0, 4.0]), 1.0);
    }

    #[test]
    fn ratios_use_absolute_thresholds() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(low_ratio(&values), 0.4);
        assert_eq!(high_ratio(&values), 0.4);
    }

    #[test]
    fn pearson_perfect_correlation() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0];
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_zero_variance_is_zero() {
        assert_eq!(pearson(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_eq!(pearson(&[1.0], &[2.0]), 0.0);
    }
}
