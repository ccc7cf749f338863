//! Status rollup - per-check verdicts and the run summary
//!
//! Pure functions over findings. A check passes with zero findings; otherwise
//! it fails at the highest severity it reported, and carries its guidance
//! entry when one exists.

use crate::core::guidance::guidance_for;
use crate::core::models::{CheckDescriptor, CheckStatus, Finding, RunSummary, Verdict};

/// Roll up the findings of one executed check
///
/// Findings belonging to other checks are ignored.
#[must_use]
pub fn check_status(descriptor: &CheckDescriptor, findings: &[Finding]) -> CheckStatus {
    let own: Vec<&Finding> = findings
        .iter()
        .filter(|f| f.check_key == descriptor.key)
        .collect();
    let severity = own.iter().map(|f| f.severity).max();
    let verdict = if own.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    let guidance = match verdict {
        Verdict::Pass => None,
        Verdict::Fail => guidance_for(&descriptor.key),
    };

    CheckStatus {
        check_key: descriptor.key.clone(),
        description: descriptor.description.clone(),
        verdict,
        severity,
        findings_count: own.len(),
        guidance,
    }
}

/// Statuses for every executed check, in the order given
#[must_use]
pub fn check_statuses(executed: &[CheckDescriptor], findings: &[Finding]) -> Vec<CheckStatus> {
    executed
        .iter()
        .map(|descriptor| check_status(descriptor, findings))
        .collect()
}

/// Summary sentence for `failed` failing checks out of `total`
#[must_use]
pub fn summary_text(total: usize, failed: usize) -> String {
    if total == 0 {
        "No checks were executed.".to_string()
    } else if failed == 0 {
        format!("All checks passed ({total}/{total}).")
    } else {
        format!("{failed} of {total} checks failed.")
    }
}

/// Summarize a set of statuses
#[must_use]
pub fn summarize(statuses: &[CheckStatus]) -> RunSummary {
    let total_checks = statuses.len();
    let failed_checks = statuses.iter().filter(|s| !s.passed()).count();
    RunSummary {
        total_checks,
        failed_checks,
        text: summary_text(total_checks, failed_checks),
    }
}
