//! Error types.

use thiserror::Error;

/// Failure of a single two-sample test.
///
/// Inside a pairwise run these never escape: they are turned into
/// advisories and the offending pair is left out of the results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TestError {
    /// A sample has fewer values than the test needs.
    #[error("need at least {needed} values per sample, got {got}")]
    InsufficientData {
        /// Minimum number of values required.
        needed: usize,
        /// Size of the smaller sample.
        got: usize,
    },

    /// Both samples are constant and equal, so the t statistic is 0/0.
    #[error("zero variance in both samples")]
    ZeroVariance,

    /// The exact Mann-Whitney distribution is only defined without ties.
    #[error("exact rank-sum distribution requires untied data")]
    TiesInExactTest,

    /// The exact Mann-Whitney distribution is too large to enumerate.
    #[error("exact rank-sum distribution too large for samples of {n1} and {n2} values")]
    ExactTooLarge {
        /// Size of the first sample.
        n1: usize,
        /// Size of the second sample.
        n2: usize,
    },

    /// A reference distribution could not be constructed or evaluated.
    #[error("distribution error: {0}")]
    Distribution(String),
}

impl TestError {
    pub(crate) fn distribution(err: impl std::fmt::Display) -> Self {
        TestError::Distribution(err.to_string())
    }
}

/// Invalid dataset construction or editing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Two columns share a name.
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// A rename supplied the wrong number of names.
    #[error("expected {expected} column names, got {got}")]
    RenameLength {
        /// Number of columns in the dataset.
        expected: usize,
        /// Number of names supplied.
        got: usize,
    },
}
