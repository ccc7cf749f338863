//! Check descriptor and run options

use serde::Serialize;

/// Identity of a registered check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDescriptor {
    /// Unique key within a registry
    pub key: String,
    /// One-line description shown by `--list`
    pub description: String,
}

/// Options passed into every check run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Permit checks that carry a template to write it when the artifact is missing.
    ///
    /// Off by default; analysis is read-only unless the caller opts in.
    pub auto_fix: bool,
}

impl CheckOptions {
    /// Read-only options (the default)
    #[must_use]
    pub const fn read_only() -> Self {
        Self { auto_fix: false }
    }

    /// Options with auto-remediation enabled
    #[must_use]
    pub const fn with_fix() -> Self {
        Self { auto_fix: true }
    }
}
