//! Per-check status and run summary
//!
//! Derived values, rebuilt from the findings of every run.

use serde::Serialize;

use super::{Finding, Severity};
use crate::core::guidance::GuidanceEntry;

/// Pass/fail verdict for one executed check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The check produced no findings
    Pass,
    /// The check produced at least one finding
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Rolled-up status of one executed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckStatus {
    /// Check key
    pub check_key: String,
    /// Human-readable description of the check
    pub description: String,
    /// Pass when there are no findings
    pub verdict: Verdict,
    /// Highest finding severity; `None` when passing
    pub severity: Option<Severity>,
    /// Number of findings the check produced
    pub findings_count: usize,
    /// Guidance, attached only to failing checks that have an entry
    pub guidance: Option<&'static GuidanceEntry>,
}

impl CheckStatus {
    /// Whether the check passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }
}

/// Aggregate counters and the summary sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of checks executed
    pub total_checks: usize,
    /// Number of checks with a `fail` verdict
    pub failed_checks: usize,
    /// Human-readable summary sentence
    pub text: String,
}

/// Finding counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    /// Info findings
    pub info: usize,
    /// Warn findings
    pub warn: usize,
    /// Error findings
    pub error: usize,
}

impl SeverityCounts {
    /// Count findings by severity
    #[must_use]
    pub fn tally(findings: &[Finding]) -> Self {
        findings.iter().fold(Self::default(), |mut counts, f| {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warn => counts.warn += 1,
                Severity::Error => counts.error += 1,
            }
            counts
        })
    }
}

/// Everything one run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Findings in execution order
    pub findings: Vec<Finding>,
    /// One status per executed check, in execution order
    pub statuses: Vec<CheckStatus>,
    /// Summary across all statuses
    pub summary: RunSummary,
}

impl RunReport {
    /// Finding counts per severity
    #[must_use]
    pub fn counts(&self) -> SeverityCounts {
        SeverityCounts::tally(&self.findings)
    }

    /// Whether the run should exit nonzero
    ///
    /// Errors always fail; warnings fail only when `strict` is set.
    #[must_use]
    pub fn violates_policy(&self, strict: bool) -> bool {
        let counts = self.counts();
        counts.error > 0 || (strict && counts.warn > 0)
    }
}
