//! Unpaired Student's t-test with pooled variance.

use statrs::distribution::{ContinuousCDF, StudentsT};

use super::descriptive::{mean, sample_variance};
use super::TestStatistic;
use crate::constants::MIN_SAMPLE_SIZE;
use crate::error::TestError;

/// Two-sided two-sample t-test assuming equal population variances.
///
/// # Formula
///
/// ```text
/// df  = n1 + n2 - 2
/// sp2 = ((n1 - 1) s1^2 + (n2 - 1) s2^2) / df
/// t   = (m1 - m2) / sqrt(sp2 (1/n1 + 1/n2))
/// p   = 2 P(T_df > |t|)
/// ```
///
/// # Errors
///
/// - [`TestError::InsufficientData`] if either sample has fewer than two values.
/// - [`TestError::ZeroVariance`] if both samples are constant with the same
///   mean, where `t` is undefined. Constant samples with different means give
///   an infinite `t` and `p = 0`.
pub fn student_t_test(x: &[f64], y: &[f64]) -> Result<TestStatistic, TestError> {
    let (n1, n2) = (x.len(), y.len());
    if n1.min(n2) < MIN_SAMPLE_SIZE {
        return Err(TestError::InsufficientData {
            needed: MIN_SAMPLE_SIZE,
            got: n1.min(n2),
        });
    }

    let df = (n1 + n2 - 2) as f64;
    let pooled_var =
        ((n1 - 1) as f64 * sample_variance(x) + (n2 - 1) as f64 * sample_variance(y)) / df;
    let diff = mean(x) - mean(y);

    if pooled_var == 0.0 {
        if diff == 0.0 {
            return Err(TestError::ZeroVariance);
        }
        return Ok(TestStatistic {
            statistic: diff.signum() * f64::INFINITY,
            p_value: 0.0,
        });
    }

    let se = (pooled_var * (1.0 / n1 as f64 + 1.0 / n2 as f64)).sqrt();
    let t = diff / se;

    let dist = StudentsT::new(0.0, 1.0, df).map_err(TestError::distribution)?;
    let p_value = (2.0 * dist.sf(t.abs())).clamp(0.0, 1.0);
    if !p_value.is_finite() {
        return Err(TestError::Distribution(format!(
            "non-finite p-value for t = {t}, df = {df}"
        )));
    }

    Ok(TestStatistic {
        statistic: t,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_p_value() {
        let result = student_t_test(&[1.0, 2.0, 3.0, 4.0, 5.0], &[6.0, 7.0, 8.0, 9.0, 10.0]).unwrap();
        assert!((result.statistic + 5.0).abs() < 1e-12);
        assert!((result.p_value - 0.001_052_825_793_366_539).abs() < 1e-9);
    }

    #[test]
    fn test_unequal_sizes_with_missing_removed() {
        let result = student_t_test(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 7.0],
            &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        )
        .unwrap();
        assert!((result.statistic + 1.109_400_392_450_458).abs() < 1e-9);
        assert!((result.p_value - 0.290_922_282_296_898_4).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_in_argument_order() {
        let x = [1.0, 4.0, 2.0, 8.0];
        let y = [3.0, 3.5, 9.0];
        let a = student_t_test(&x, &y).unwrap();
        let b = student_t_test(&y, &x).unwrap();
        assert!((a.p_value - b.p_value).abs() < 1e-15);
        assert!((a.statistic + b.statistic).abs() < 1e-12);
    }

    #[test]
    fn test_identical_samples() {
        let x = [1.0, 2.0, 3.0];
        let result = student_t_test(&x, &x).unwrap();
        assert_eq!(result.statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_variance_equal_means() {
        let x = [1.0; 4];
        assert_eq!(student_t_test(&x, &x), Err(TestError::ZeroVariance));
    }

    #[test]
    fn test_zero_variance_different_means() {
        let result = student_t_test(&[1.0, 1.0], &[2.0, 2.0]).unwrap();
        assert_eq!(result.statistic, f64::NEG_INFINITY);
        assert_eq!(result.p_value, 0.0);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            student_t_test(&[1.0], &[1.0, 2.0]),
            Err(TestError::InsufficientData { needed: 2, got: 1 })
        );
    }
}
