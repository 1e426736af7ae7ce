//! JSON export of a [`Report`].
//!
//! The object carries `test_kind`, `column_count`, the `results` rows (label,
//! column names, statistic, raw and 10-decimal p-value, significance) and the
//! `advisories` for skipped pairs. Field names follow the Rust structs.

use crate::result::Report;

/// One-line JSON, suited to logs and pipes.
///
/// # Errors
///
/// Propagates `serde_json` failures. p-values are always finite, but an
/// infinite t statistic (constant samples with different means) is written
/// as `null`.
pub fn to_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Indented JSON for people to read. Same content as [`to_json`].
pub fn to_json_pretty(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::Advisory;
    use crate::result::{ComparisonResult, ResultsTable};
    use crate::types::TestKind;

    fn make_report() -> Report {
        let mut results = ResultsTable::new();
        results.push(ComparisonResult::new("A", "B", TestKind::TTestEqualVar, -1.5, 0.2));
        Report {
            test_kind: TestKind::TTestEqualVar,
            column_count: 3,
            results,
            advisories: vec![Advisory::InsufficientData {
                first: "B".into(),
                second: "C".into(),
            }],
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_report()).unwrap();
        assert!(json.contains("\"comparison\":\"A vs B\""));
        assert!(json.contains("\"p_value_formatted\":\"0.2000000000\""));
        assert!(json.contains("\"significance\":\"NotSignificant\""));
        assert!(json.contains("InsufficientData"));
    }

    #[test]
    fn test_to_json_pretty_round_trips() {
        let report = make_report();
        let json = to_json_pretty(&report).unwrap();
        assert!(json.contains('\n'));
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
