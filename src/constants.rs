//! Fixed constants of the pairwise comparison contract.

/// p-values strictly below this are reported as significant.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Minimum number of non-missing values a sample needs to be tested.
pub const MIN_SAMPLE_SIZE: usize = 2;

/// Digits after the decimal point in a formatted p-value.
pub const P_VALUE_DECIMALS: usize = 10;

/// Largest sample size for which the automatic Mann-Whitney method
/// still chooses the exact null distribution.
pub const EXACT_RANK_SUM_MAX_N: usize = 8;

/// Upper bound on `min(n1, n2)² · max(n1, n2)`, the work of building the
/// exact Mann-Whitney null distribution.
pub const EXACT_RANK_SUM_MAX_WORK: usize = 100_000_000;
