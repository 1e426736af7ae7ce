//! Enumerations shared across the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::SIGNIFICANCE_LEVEL;

/// Which two-sample test to run on every column pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestKind {
    /// Unpaired Student's t-test assuming equal variances, two-sided.
    #[default]
    TTestEqualVar,
    /// Mann-Whitney U / Wilcoxon rank-sum test, two-sided.
    RankSum,
}

impl TestKind {
    /// Human-readable label for presenting the choice to a user.
    pub fn description(&self) -> &'static str {
        match self {
            TestKind::TTestEqualVar => "Unpaired two-sample t-test (parametric)",
            TestKind::RankSum => "Wilcoxon rank-sum test (non-parametric/Mann-Whitney U)",
        }
    }

    /// Short name of the test, used in advisories and logs.
    pub fn short_name(&self) -> &'static str {
        match self {
            TestKind::TTestEqualVar => "t-test",
            TestKind::RankSum => "Mann-Whitney U test",
        }
    }

    /// All selectable test kinds, in display order.
    pub fn all() -> [TestKind; 2] {
        [TestKind::TTestEqualVar, TestKind::RankSum]
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for TestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ttest" | "t-test" | "t" | "student" => Ok(TestKind::TTestEqualVar),
            "mannwhitney" | "mann-whitney" | "ranksum" | "rank-sum" | "wilcoxon" => {
                Ok(TestKind::RankSum)
            }
            other => Err(format!("unknown test kind '{other}'")),
        }
    }
}

/// How the Mann-Whitney p-value is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankSumMethod {
    /// Exact when there are no ties and either sample has at most 8 values,
    /// normal approximation otherwise.
    #[default]
    Auto,
    /// Exact null distribution of U. Fails on tied data.
    Exact,
    /// Normal approximation with tie correction.
    Asymptotic,
}

impl FromStr for RankSumMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(RankSumMethod::Auto),
            "exact" => Ok(RankSumMethod::Exact),
            "asymptotic" | "normal" => Ok(RankSumMethod::Asymptotic),
            other => Err(format!("unknown rank-sum method '{other}'")),
        }
    }
}

/// Significance flag derived from the fixed 0.05 threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Significance {
    /// p < 0.05.
    Significant,
    /// p >= 0.05.
    NotSignificant,
}

impl Significance {
    /// Classify a raw p-value. The boundary value 0.05 is not significant.
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < SIGNIFICANCE_LEVEL {
            Significance::Significant
        } else {
            Significance::NotSignificant
        }
    }

    /// Whether this flag marks a significant difference.
    pub fn is_significant(&self) -> bool {
        matches!(self, Significance::Significant)
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Significance::Significant => f.write_str("significant"),
            Significance::NotSignificant => f.write_str("not significant"),
        }
    }
}
