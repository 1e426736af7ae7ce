//! Main `PairwiseTester` entry point and builder.

use crate::advisory::{Advisory, AdvisorySink, LogSink};
use crate::config::Config;
use crate::constants::MIN_SAMPLE_SIZE;
use crate::dataset::Dataset;
use crate::error::TestError;
use crate::result::{ComparisonResult, Report, ResultsTable};
use crate::statistics::{mann_whitney_u, student_t_test, TestStatistic};
use crate::types::{RankSumMethod, TestKind};

/// Runs a two-sample test on every unordered pair of dataset columns.
///
/// Pairs are visited as `(i, j)` with `i < j`, `i` ascending and then `j`
/// ascending, and rows appear in that order. Missing values are dropped from
/// each column independently; the test is unpaired.
///
/// # Example
///
/// ```
/// use pairwise_stats::{Column, Dataset, PairwiseTester, TestKind};
///
/// let dataset = Dataset::new(vec![
///     Column::from_values("control", [4.1, 3.9, 4.3, 4.0]),
///     Column::from_values("treated", [5.2, 5.0, 5.6, 5.1]),
/// ])
/// .unwrap();
///
/// let results = PairwiseTester::new().run(&dataset, TestKind::TTestEqualVar);
/// assert_eq!(results.rows()[0].comparison, "control vs treated");
/// assert!(results.rows()[0].is_significant());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PairwiseTester {
    config: Config,
}

impl PairwiseTester {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create with defaults overridden by `PAIRWISE_*` environment variables.
    pub fn from_env() -> Self {
        Self::with_config(Config::default().merge_env())
    }

    /// Set the test used by [`run_default`](Self::run_default).
    pub fn test_kind(mut self, kind: TestKind) -> Self {
        self.config.test_kind = kind;
        self
    }

    /// Set how Mann-Whitney p-values are computed.
    pub fn rank_sum_method(mut self, method: RankSumMethod) -> Self {
        self.config.rank_sum_method = method;
        self
    }

    /// Enable or disable the continuity correction of the asymptotic
    /// Mann-Whitney test.
    pub fn continuity_correction(mut self, enabled: bool) -> Self {
        self.config.continuity_correction = enabled;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compare all column pairs, logging advisories through `tracing`.
    pub fn run(&self, dataset: &Dataset, kind: TestKind) -> ResultsTable {
        self.run_with_sink(dataset, kind, LogSink)
    }

    /// [`run`](Self::run) with the configured test kind.
    pub fn run_default(&self, dataset: &Dataset) -> ResultsTable {
        self.run(dataset, self.config.test_kind)
    }

    /// Compare all column pairs, delivering advisories to `sink`.
    ///
    /// Pairs where either sample has fewer than two values raise
    /// [`Advisory::InsufficientData`]; pairs where the test itself fails
    /// raise [`Advisory::ComputationFailure`]. Both are left out of the
    /// returned table and the run continues.
    pub fn run_with_sink<S: AdvisorySink>(
        &self,
        dataset: &Dataset,
        kind: TestKind,
        mut sink: S,
    ) -> ResultsTable {
        let columns = dataset.columns();
        let samples: Vec<Vec<f64>> = columns.iter().map(|c| c.sample()).collect();
        let mut table = ResultsTable::new();

        tracing::debug!(
            columns = columns.len(),
            pairs = dataset.pair_count(),
            test = %kind,
            "running pairwise comparisons"
        );

        for i in 0..columns.len() {
            for j in (i + 1)..columns.len() {
                let first = columns[i].name();
                let second = columns[j].name();
                let (x, y) = (&samples[i], &samples[j]);

                if x.len() < MIN_SAMPLE_SIZE || y.len() < MIN_SAMPLE_SIZE {
                    sink.notify(Advisory::InsufficientData {
                        first: first.to_string(),
                        second: second.to_string(),
                    });
                    continue;
                }

                match self.compare(x, y, kind) {
                    Ok(outcome) => {
                        tracing::debug!(
                            first,
                            second,
                            statistic = outcome.statistic,
                            p_value = outcome.p_value,
                            "pair compared"
                        );
                        table.push(ComparisonResult::new(
                            first,
                            second,
                            kind,
                            outcome.statistic,
                            outcome.p_value,
                        ));
                    }
                    Err(err) => sink.notify(Advisory::ComputationFailure {
                        first: first.to_string(),
                        second: second.to_string(),
                        reason: err.to_string(),
                    }),
                }
            }
        }

        table
    }

    /// Compare all column pairs and return rows and advisories together.
    pub fn report(&self, dataset: &Dataset, kind: TestKind) -> Report {
        let mut advisories = Vec::new();
        let results = self.run_with_sink(dataset, kind, &mut advisories);
        Report {
            test_kind: kind,
            column_count: dataset.len(),
            results,
            advisories,
        }
    }

    /// Run the selected test on two already-cleaned samples.
    ///
    /// # Errors
    ///
    /// Propagates the test's [`TestError`]. A p-value outside [0, 1] or
    /// non-finite is reported as [`TestError::Distribution`].
    pub fn compare(&self, x: &[f64], y: &[f64], kind: TestKind) -> Result<TestStatistic, TestError> {
        let outcome = match kind {
            TestKind::TTestEqualVar => student_t_test(x, y)?,
            TestKind::RankSum => mann_whitney_u(
                x,
                y,
                self.config.rank_sum_method,
                self.config.continuity_correction,
            )?,
        };

        if !(0.0..=1.0).contains(&outcome.p_value) {
            return Err(TestError::Distribution(format!(
                "invalid p-value {}",
                outcome.p_value
            )));
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;

    fn abc() -> Dataset {
        Dataset::new(vec![
            Column::from_values("A", [1.0, 2.0, 3.0, 4.0]),
            Column::from_values("B", [2.0, 3.0, 5.0, 8.0]),
            Column::from_values("C", [10.0, 11.0, 12.5, 13.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_builder_api() {
        let tester = PairwiseTester::new()
            .test_kind(TestKind::RankSum)
            .rank_sum_method(RankSumMethod::Exact)
            .continuity_correction(false);

        let config = tester.config();
        assert_eq!(config.test_kind, TestKind::RankSum);
        assert_eq!(config.rank_sum_method, RankSumMethod::Exact);
        assert!(!config.continuity_correction);
    }

    #[test]
    fn test_enumeration_order() {
        let table = PairwiseTester::new().run(&abc(), TestKind::TTestEqualVar);
        let labels: Vec<&str> = table.iter().map(|r| r.comparison.as_str()).collect();
        assert_eq!(labels, vec!["A vs B", "A vs C", "B vs C"]);
    }

    #[test]
    fn test_run_default_uses_configured_kind() {
        let tester = PairwiseTester::new().test_kind(TestKind::RankSum);
        let table = tester.run_default(&abc());
        assert!(table.iter().all(|r| r.test_kind == TestKind::RankSum));
    }

    #[test]
    fn test_insufficient_data_is_skipped() {
        let dataset = Dataset::new(vec![
            Column::from_values("A", [1.0, 2.0, 3.0]),
            Column::new("B", [Some(1.0), None, None]),
            Column::from_values("C", [4.0, 5.0, 6.5]),
        ])
        .unwrap();

        let mut advisories = Vec::new();
        let table =
            PairwiseTester::new().run_with_sink(&dataset, TestKind::TTestEqualVar, &mut advisories);

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].comparison, "A vs C");
        assert_eq!(
            advisories,
            vec![
                Advisory::InsufficientData {
                    first: "A".into(),
                    second: "B".into()
                },
                Advisory::InsufficientData {
                    first: "B".into(),
                    second: "C".into()
                },
            ]
        );
    }

    #[test]
    fn test_computation_failure_continues() {
        let dataset = Dataset::new(vec![
            Column::from_values("A", [1.0, 1.0, 1.0, 1.0]),
            Column::from_values("B", [1.0, 1.0, 1.0, 1.0]),
            Column::from_values("C", [2.0, 3.0, 4.0, 5.0]),
        ])
        .unwrap();

        let report = PairwiseTester::new().report(&dataset, TestKind::TTestEqualVar);
        let labels: Vec<&str> = report.results.iter().map(|r| r.comparison.as_str()).collect();
        assert_eq!(labels, vec!["A vs C", "B vs C"]);
        assert_eq!(
            report.advisories,
            vec![Advisory::ComputationFailure {
                first: "A".into(),
                second: "B".into(),
                reason: "zero variance in both samples".into(),
            }]
        );
    }

    #[test]
    fn test_forced_exact_with_ties_is_a_failure() {
        let dataset = Dataset::new(vec![
            Column::from_values("A", [1.0, 2.0, 3.0]),
            Column::from_values("B", [3.0, 4.0, 5.0]),
        ])
        .unwrap();

        let report = PairwiseTester::new()
            .rank_sum_method(RankSumMethod::Exact)
            .report(&dataset, TestKind::RankSum);
        assert!(report.results.is_empty());
        assert!(report.advisories[0].is_failure());
        assert!(report.no_valid_comparisons());
    }

    #[test]
    fn test_forced_exact_on_large_samples_is_a_failure() {
        let dataset = Dataset::new(vec![
            Column::from_values("A", (0..500).map(f64::from)),
            Column::from_values("B", (500..1000).map(f64::from)),
        ])
        .unwrap();

        let report = PairwiseTester::new()
            .rank_sum_method(RankSumMethod::Exact)
            .report(&dataset, TestKind::RankSum);
        assert!(report.results.is_empty());
        assert_eq!(
            report.advisories[0].description(),
            "computation failed for pair A vs B: \
             exact rank-sum distribution too large for samples of 500 and 500 values"
        );
    }

    #[test]
    fn test_compare_direct() {
        let tester = PairwiseTester::new();
        let outcome = tester
            .compare(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], TestKind::RankSum)
            .unwrap();
        assert!((outcome.p_value - 0.1).abs() < 1e-12);
    }
}
