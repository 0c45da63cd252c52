//! Check outcome aggregation
//!
//! The run is best-effort: every check produces an outcome, nothing aborts
//! the run, and the caller receives the full ordered list. Exit-status
//! policy stays in one place instead of being reconstructed from printed
//! lines.

use serde::{Deserialize, Serialize};

/// Result of a single reachability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckOutcome {
    /// The service answered as expected
    Passed { detail: Option<String> },
    /// The service could not be verified
    Failed { reason: String },
    /// The check did not run because required configuration was absent
    Skipped { reason: String },
}

impl CheckOutcome {
    /// Create a passing outcome without extra detail
    pub fn passed() -> Self {
        Self::Passed { detail: None }
    }

    /// Create a passing outcome with a detail string
    pub fn passed_with<S: Into<String>>(detail: S) -> Self {
        Self::Passed {
            detail: Some(detail.into()),
        }
    }

    /// Create a failing outcome
    pub fn failed<S: Into<String>>(reason: S) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Create a skipped outcome
    pub fn skipped<S: Into<String>>(reason: S) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Outcome of one named check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub name: String,
    pub outcome: CheckOutcome,
}

impl CheckReport {
    pub fn new<S: Into<String>>(name: S, outcome: CheckOutcome) -> Self {
        Self {
            name: name.into(),
            outcome,
        }
    }
}

/// Ordered outcomes for a whole verification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub checks: Vec<CheckReport>,
}

impl VerificationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed check
    pub fn push(&mut self, check: CheckReport) {
        self.checks.push(check);
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.outcome.is_passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.outcome.is_failed()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.outcome.is_skipped())
            .count()
    }

    /// True when every executed check passed (skipped checks do not count
    /// against the run)
    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }
}
