//! Descriptive statistics used by the parametric test.

/// Arithmetic mean, or `NaN` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample variance (denominator `n - 1`).
///
/// Returns `NaN` when fewer than two values are given.
pub fn sample_variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    let sum_sq: f64 = data.iter().map(|x| (x - m).powi(2)).sum();
    sum_sq / (n - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_sample_variance() {
        // Known value: var([2, 4, 4, 4, 5, 5, 7, 9]) = 32 / 7
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((sample_variance(&data) - 32.0 / 7.0).abs() < 1e-12);
        assert_eq!(sample_variance(&[3.0, 3.0, 3.0]), 0.0);
        assert!(sample_variance(&[1.0]).is_nan());
    }
}
