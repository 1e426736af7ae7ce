//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::advisory::Advisory;
use crate::result::{ComparisonResult, Report};

/// Format a Report for human-readable terminal output.
///
/// One line per comparison with the formatted p-value and significance,
/// followed by any advisories.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("pairwise-stats\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Test: {}\n", report.test_kind.description()));
    output.push_str(&format!("  Columns: {}\n", report.column_count));
    output.push('\n');

    if report.results.is_empty() {
        if report.no_valid_comparisons() {
            output.push_str(&format!(
                "  {}\n",
                "\u{26A0} No valid comparisons could be made. Check your data."
                    .yellow()
                    .bold()
            ));
        } else {
            output.push_str("  At least two columns are needed for a comparison.\n");
        }
    } else {
        let width = report
            .results
            .iter()
            .map(|r| r.comparison.chars().count())
            .max()
            .unwrap_or(0)
            .max("Comparison".len());

        output.push_str(&format!(
            "  {:<width$}  {:<12}  {}\n",
            "Comparison", "p-value", "Significance"
        ));
        for row in &report.results {
            output.push_str(&format_row(row, width));
        }
    }

    if !report.advisories.is_empty() {
        output.push('\n');
        for advisory in &report.advisories {
            output.push_str(&format!("  {}\n", format_advisory(advisory)));
        }
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');

    output
}

fn format_row(row: &ComparisonResult, width: usize) -> String {
    let flag = if row.is_significant() {
        row.significance.to_string().green().bold().to_string()
    } else {
        row.significance.to_string().dimmed().to_string()
    };
    format!(
        "  {:<width$}  {:<12}  {}\n",
        row.comparison, row.p_value_formatted, flag
    )
}

fn format_advisory(advisory: &Advisory) -> String {
    if advisory.is_failure() {
        format!("{} {}", "\u{2717}".red(), advisory)
    } else {
        format!("{} {}", "\u{26A0}".yellow(), advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::tester::PairwiseTester;
    use crate::types::TestKind;

    #[test]
    fn test_format_demo_report() {
        colored::control::set_override(false);
        let report = PairwiseTester::new().report(&Dataset::demo(), TestKind::TTestEqualVar);
        let output = format_report(&report);
        assert!(output.contains("pairwise-stats"));
        assert!(output.contains("Unpaired two-sample t-test"));
        assert!(output.contains("Sample1 vs Sample2"));
        assert!(output.contains("0.2909222823"));
        assert!(output.contains("not significant"));
    }

    #[test]
    fn test_format_advisories_and_empty_results() {
        colored::control::set_override(false);
        let report = Report {
            test_kind: TestKind::RankSum,
            column_count: 2,
            results: Default::default(),
            advisories: vec![Advisory::InsufficientData {
                first: "A".into(),
                second: "B".into(),
            }],
        };
        let output = format_report(&report);
        assert!(output.contains("No valid comparisons"));
        assert!(output.contains("insufficient data for pair A vs B"));
    }
}
