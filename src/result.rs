//! Comparison result types.

use serde::{Deserialize, Serialize};

use crate::advisory::Advisory;
use crate::constants::P_VALUE_DECIMALS;
use crate::types::{Significance, TestKind};

/// Outcome of testing one column pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// `"<first> vs <second>"`.
    pub comparison: String,

    /// Name of the column with the lower index.
    pub first: String,

    /// Name of the column with the higher index.
    pub second: String,

    /// Test that produced this row.
    pub test_kind: TestKind,

    /// Test statistic: `t` for the t-test, `U` of `first` for Mann-Whitney.
    pub statistic: f64,

    /// Raw two-sided p-value in [0, 1]. Significance is derived from this.
    pub p_value: f64,

    /// p-value as fixed-point text with exactly 10 decimals.
    pub p_value_formatted: String,

    /// Whether `p_value < 0.05`.
    pub significance: Significance,
}

impl ComparisonResult {
    /// Build a row from a finished test.
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        test_kind: TestKind,
        statistic: f64,
        p_value: f64,
    ) -> Self {
        let first = first.into();
        let second = second.into();
        Self {
            comparison: format!("{first} vs {second}"),
            first,
            second,
            test_kind,
            statistic,
            p_value,
            p_value_formatted: format_p_value(p_value),
            significance: Significance::from_p_value(p_value),
        }
    }

    /// Shorthand for `self.significance.is_significant()`.
    pub fn is_significant(&self) -> bool {
        self.significance.is_significant()
    }
}

/// Format a p-value as fixed-point with exactly 10 digits after the point.
pub fn format_p_value(p_value: f64) -> String {
    format!("{:.*}", P_VALUE_DECIMALS, p_value)
}

/// Ordered comparison rows, in pair-enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultsTable {
    rows: Vec<ComparisonResult>,
}

impl ResultsTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, row: ComparisonResult) {
        self.rows.push(row);
    }

    /// Rows in enumeration order.
    pub fn rows(&self) -> &[ComparisonResult] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no pair produced a row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows.
    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonResult> {
        self.rows.iter()
    }

    /// Find the row for a comparison label such as `"A vs B"`.
    pub fn get(&self, comparison: &str) -> Option<&ComparisonResult> {
        self.rows.iter().find(|r| r.comparison == comparison)
    }

    /// Rows flagged significant.
    pub fn significant(&self) -> impl Iterator<Item = &ComparisonResult> {
        self.rows.iter().filter(|r| r.is_significant())
    }

    /// Consume into the underlying rows.
    pub fn into_rows(self) -> Vec<ComparisonResult> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ResultsTable {
    type Item = &'a ComparisonResult;
    type IntoIter = std::slice::Iter<'a, ComparisonResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Results together with the advisories raised while producing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Test applied to every pair.
    pub test_kind: TestKind,
    /// Number of columns in the input.
    pub column_count: usize,
    /// Comparison rows.
    pub results: ResultsTable,
    /// Notices for pairs left out of `results`.
    pub advisories: Vec<Advisory>,
}

impl Report {
    /// True when there were pairs to compare but none yielded a row.
    pub fn no_valid_comparisons(&self) -> bool {
        self.column_count >= 2 && self.results.is_empty()
    }
}
