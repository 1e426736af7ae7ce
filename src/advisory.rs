//! Advisory notices about skipped pairs.
//!
//! A pairwise run never fails as a whole. Pairs that cannot be tested are
//! left out of the results and reported through an [`AdvisorySink`].

use serde::{Deserialize, Serialize};

/// Why a column pair is missing from the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advisory {
    /// One of the samples had fewer than two non-missing values.
    InsufficientData {
        /// First column of the pair.
        first: String,
        /// Second column of the pair.
        second: String,
    },

    /// The statistical routine failed on this pair.
    ComputationFailure {
        /// First column of the pair.
        first: String,
        /// Second column of the pair.
        second: String,
        /// Failure detail.
        reason: String,
    },
}

impl Advisory {
    /// Label of the affected pair, `"<first> vs <second>"`.
    pub fn pair_label(&self) -> String {
        let (first, second) = match self {
            Advisory::InsufficientData { first, second }
            | Advisory::ComputationFailure { first, second, .. } => (first, second),
        };
        format!("{first} vs {second}")
    }

    /// Whether this advisory reports a failed computation rather than
    /// missing data.
    pub fn is_failure(&self) -> bool {
        matches!(self, Advisory::ComputationFailure { .. })
    }

    /// Human-readable message for display.
    pub fn description(&self) -> String {
        match self {
            Advisory::InsufficientData { .. } => {
                format!("insufficient data for pair {}", self.pair_label())
            }
            Advisory::ComputationFailure { reason, .. } => {
                format!("computation failed for pair {}: {}", self.pair_label(), reason)
            }
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

/// Receiver of advisories emitted during a pairwise run.
pub trait AdvisorySink {
    /// Handle one advisory.
    fn notify(&mut self, advisory: Advisory);
}

impl AdvisorySink for Vec<Advisory> {
    fn notify(&mut self, advisory: Advisory) {
        self.push(advisory);
    }
}

impl<S: AdvisorySink + ?Sized> AdvisorySink for &mut S {
    fn notify(&mut self, advisory: Advisory) {
        (**self).notify(advisory);
    }
}

/// Sink that forwards every advisory to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AdvisorySink for LogSink {
    fn notify(&mut self, advisory: Advisory) {
        tracing::warn!(pair = %advisory.pair_label(), "{}", advisory);
    }
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardSink;

impl AdvisorySink for DiscardSink {
    fn notify(&mut self, _advisory: Advisory) {}
}
