//! Finding severity levels
//!
//! Ordered `Info < Warn < Error`; the order drives status rollup and exit codes.

use serde::Serialize;

/// How important a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - nothing to act on
    #[default]
    Info,
    /// Something is suboptimal; fails only in strict mode
    Warn,
    /// Policy violation; always fails the run
    Error,
}

impl Severity {
    /// Lowercase wire name (`info`, `warn`, `error`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
