//! Mann-Whitney U (Wilcoxon rank-sum) test.
//!
//! The p-value comes either from the exact null distribution of U or from
//! its normal approximation with tie and continuity corrections. With
//! [`RankSumMethod::Auto`] the exact distribution is used when the data has
//! no ties and at least one sample is small.

use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::factorial::ln_binomial;

use super::rank::average_ranks;
use super::TestStatistic;
use crate::constants::{EXACT_RANK_SUM_MAX_N, EXACT_RANK_SUM_MAX_WORK, MIN_SAMPLE_SIZE};
use crate::error::TestError;
use crate::types::RankSumMethod;

/// Two-sided Mann-Whitney U test.
///
/// The returned statistic is `U1`, the U statistic of `x`:
///
/// ```text
/// U1 = R1 - n1 (n1 + 1) / 2      R1 = rank sum of x in the pooled sample
/// U2 = n1 n2 - U1
/// ```
///
/// and the p-value is computed for `max(U1, U2)`, doubled and capped at 1.
///
/// # Errors
///
/// - [`TestError::InsufficientData`] if either sample has fewer than two values.
/// - [`TestError::TiesInExactTest`] if [`RankSumMethod::Exact`] is forced on
///   tied data.
/// - [`TestError::ExactTooLarge`] if [`RankSumMethod::Exact`] is forced on
///   samples whose exact distribution is too large to enumerate.
pub fn mann_whitney_u(
    x: &[f64],
    y: &[f64],
    method: RankSumMethod,
    continuity_correction: bool,
) -> Result<TestStatistic, TestError> {
    let (n1, n2) = (x.len(), y.len());
    if n1.min(n2) < MIN_SAMPLE_SIZE {
        return Err(TestError::InsufficientData {
            needed: MIN_SAMPLE_SIZE,
            got: n1.min(n2),
        });
    }

    let pooled: Vec<f64> = x.iter().chain(y).copied().collect();
    let ranking = average_ranks(&pooled);

    let r1: f64 = ranking.ranks[..n1].iter().sum();
    let u1 = r1 - (n1 * (n1 + 1)) as f64 / 2.0;
    let u2 = (n1 * n2) as f64 - u1;
    let u = u1.max(u2);

    let exact = match method {
        RankSumMethod::Exact => {
            if ranking.has_ties() {
                return Err(TestError::TiesInExactTest);
            }
            if !exact_is_feasible(n1, n2) {
                return Err(TestError::ExactTooLarge { n1, n2 });
            }
            true
        }
        RankSumMethod::Asymptotic => false,
        RankSumMethod::Auto => {
            !ranking.has_ties()
                && n1.min(n2) <= EXACT_RANK_SUM_MAX_N
                && exact_is_feasible(n1, n2)
        }
    };

    let p_value = if exact {
        2.0 * exact_upper_tail(u, n1, n2)
    } else {
        2.0 * asymptotic_upper_tail(u, n1, n2, ranking.tie_term(), continuity_correction)?
    };

    Ok(TestStatistic {
        statistic: u1,
        p_value: p_value.clamp(0.0, 1.0),
    })
}

/// True if the exact counts can be built within the work bound and their
/// total, `C(n1 + n2, min(n1, n2))`, fits in an `f64`.
fn exact_is_feasible(n1: usize, n2: usize) -> bool {
    let (m, n) = (n1.min(n2), n1.max(n2));
    let within_work = m
        .checked_mul(m)
        .and_then(|mm| mm.checked_mul(n))
        .is_some_and(|work| work <= EXACT_RANK_SUM_MAX_WORK);
    within_work && ln_binomial((m + n) as u64, m as u64) < f64::MAX.ln()
}

/// `P(U >= u)` under the exact null distribution for sample sizes `n1`, `n2`.
fn exact_upper_tail(u: f64, n1: usize, n2: usize) -> f64 {
    let counts = exact_u_counts(n1, n2);
    let total: f64 = counts.iter().sum();
    let start = (u.ceil().max(0.0) as usize).min(counts.len());
    counts[start..].iter().sum::<f64>() / total
}

/// Number of rank arrangements giving each value of U, indexed by U.
///
/// These are the coefficients of the Gaussian binomial coefficient
/// `[n1 + n2 choose m]_q`, built from the product
///
/// ```text
/// prod_{i=1..m} (1 - q^(n+i)) / (1 - q^i)     m = min(n1, n2), n = max(n1, n2)
/// ```
///
/// evaluated as a power series truncated at degree `m n`.
fn exact_u_counts(n1: usize, n2: usize) -> Vec<f64> {
    let (m, n) = (n1.min(n2), n1.max(n2));
    let len = m * n + 1;
    let mut c = vec![0.0; len];
    c[0] = 1.0;

    for i in 1..=m {
        let shift = n + i;
        for k in (shift..len).rev() {
            c[k] -= c[k - shift];
        }
        for k in i..len {
            c[k] += c[k - i];
        }
    }

    c
}

/// `P(U >= u)` from the normal approximation.
fn asymptotic_upper_tail(
    u: f64,
    n1: usize,
    n2: usize,
    tie_term: f64,
    continuity_correction: bool,
) -> Result<f64, TestError> {
    let (n1f, n2f) = (n1 as f64, n2 as f64);
    let n = n1f + n2f;
    let mu = n1f * n2f / 2.0;
    let variance = n1f * n2f / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));

    // Every value tied: U sits exactly at its mean.
    if variance <= 0.0 {
        return Ok(1.0);
    }

    let mut numerator = u - mu;
    if continuity_correction {
        numerator -= 0.5;
    }
    let z = numerator / variance.sqrt();

    let normal = Normal::new(0.0, 1.0).map_err(TestError::distribution)?;
    Ok(normal.sf(z))
}
