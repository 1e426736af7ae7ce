//! Statistical routines behind the pairwise comparisons.
//!
//! - Descriptive helpers (mean, unbiased variance)
//! - Average ranking with tie bookkeeping
//! - Student's t-test with pooled variance
//! - Mann-Whitney U test, exact and asymptotic

mod descriptive;
mod mann_whitney;
mod rank;
mod t_test;

use serde::{Deserialize, Serialize};

pub use descriptive::{mean, sample_variance};
pub use mann_whitney::mann_whitney_u;
pub use rank::{average_ranks, Ranking};
pub use t_test::student_t_test;

/// Statistic and two-sided p-value of a two-sample test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestStatistic {
    /// Test statistic (`t` or `U1`).
    pub statistic: f64,
    /// Two-sided p-value in [0, 1].
    pub p_value: f64,
}
