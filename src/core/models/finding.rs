//! Finding model
//!
//! One observation reported by one check. Findings are produced by a check's
//! `run` and never modified afterwards.

use serde::Serialize;

use super::Severity;

/// A single reported observation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Finding {
    /// Key of the check that produced this finding
    #[serde(rename = "check")]
    pub check_key: String,

    /// Severity of the observation
    #[serde(rename = "level")]
    pub severity: Severity,

    /// Location the finding concerns, relative to the scanned root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Short human-readable description
    pub message: String,

    /// True when auto-remediation corrected the issue
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fixed: bool,
}

impl Finding {
    /// Create a finding with the given severity
    pub fn new(
        check_key: impl Into<String>,
        severity: Severity,
        path: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            check_key: check_key.into(),
            severity,
            path,
            message: message.into(),
            fixed: false,
        }
    }

    /// Info-level finding at `path`
    pub fn info(check_key: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check_key, Severity::Info, Some(path.into()), message)
    }

    /// Warn-level finding at `path`
    pub fn warn(check_key: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check_key, Severity::Warn, Some(path.into()), message)
    }

    /// Error-level finding at `path`
    pub fn error(check_key: impl Into<String>, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(check_key, Severity::Error, Some(path.into()), message)
    }

    /// Mark the finding as auto-remediated
    #[must_use]
    pub const fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }
}
