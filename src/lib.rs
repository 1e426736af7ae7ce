//! # pairwise-stats
//!
//! Pairwise two-sample hypothesis tests across the columns of a small dataset.
//!
//! Given named columns of possibly-missing values and a test selection, this
//! crate tests every unordered column pair and reports, per pair:
//! - A comparison label (`"A vs B"`)
//! - The two-sided p-value, raw and formatted to exactly 10 decimals
//! - A significance flag at the fixed threshold p < 0.05
//!
//! Two tests are available: Student's t-test with pooled variance and the
//! Mann-Whitney U (Wilcoxon rank-sum) test.
//!
//! Pairs that cannot be tested (a sample with fewer than two values, or a
//! numerical failure such as two constant, equal samples) are left out of the
//! results and reported as [`Advisory`] notices instead. A run never fails as
//! a whole.
//!
//! ## Quick Start
//!
//! ```
//! use pairwise_stats::{compare, Dataset, TestKind};
//!
//! let report = compare(&Dataset::demo(), TestKind::RankSum);
//!
//! for row in &report.results {
//!     println!("{}: {} ({})", row.comparison, row.p_value_formatted, row.significance);
//! }
//! for advisory in &report.advisories {
//!     eprintln!("{advisory}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod advisory;
mod config;
mod constants;
mod dataset;
mod error;
mod result;
mod tester;
mod types;

// Functional modules
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use advisory::{Advisory, AdvisorySink, DiscardSink, LogSink};
pub use config::Config;
pub use constants::{MIN_SAMPLE_SIZE, P_VALUE_DECIMALS, SIGNIFICANCE_LEVEL};
pub use dataset::{Column, Dataset};
pub use error::{DatasetError, TestError};
pub use result::{format_p_value, ComparisonResult, Report, ResultsTable};
pub use tester::PairwiseTester;
pub use types::{RankSumMethod, Significance, TestKind};

/// Convenience function: compare all column pairs with default configuration.
///
/// Returns the results together with any advisories.
pub fn compare(dataset: &Dataset, kind: TestKind) -> Report {
    PairwiseTester::new().report(dataset, kind)
}
