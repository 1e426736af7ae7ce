//! Configuration for pairwise comparisons.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{RankSumMethod, TestKind};

/// Configuration options for `PairwiseTester`.
///
/// The significance threshold (0.05), the minimum sample size (2) and the
/// p-value precision (10 decimals) are fixed and not part of the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Test used by `PairwiseTester::run_default` (default: t-test).
    pub test_kind: TestKind,

    /// How Mann-Whitney p-values are computed (default: Auto).
    pub rank_sum_method: RankSumMethod,

    /// Apply the 0.5 continuity correction in the asymptotic
    /// Mann-Whitney test (default: true).
    pub continuity_correction: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            test_kind: TestKind::TTestEqualVar,
            rank_sum_method: RankSumMethod::Auto,
            continuity_correction: true,
        }
    }
}

impl Config {
    /// Merge overrides from environment variables.
    ///
    /// - `PAIRWISE_TEST`: `ttest` or `mannwhitney`
    /// - `PAIRWISE_RANK_SUM_METHOD`: `auto`, `exact` or `asymptotic`
    /// - `PAIRWISE_CONTINUITY`: `true`/`false` (also `1`/`0`)
    ///
    /// Unset or unparsable variables leave the current value in place.
    pub fn merge_env(mut self) -> Self {
        if let Some(kind) = parse_env::<TestKind>("PAIRWISE_TEST") {
            self.test_kind = kind;
        }
        if let Some(method) = parse_env::<RankSumMethod>("PAIRWISE_RANK_SUM_METHOD") {
            self.rank_sum_method = method;
        }
        if let Some(flag) = parse_bool_env("PAIRWISE_CONTINUITY") {
            self.continuity_correction = flag;
        }
        self
    }
}

fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn parse_bool_env(key: &str) -> Option<bool> {
    match env::var(key).ok()?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
