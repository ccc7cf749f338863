//! Runner - executes registered checks against a target root
//!
//! Checks run one at a time in registration order. A selection narrows the
//! run to a subset of keys; it is validated in full before anything runs.
//! A cancellation flag is observed between checks.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::core::check::CheckError;
use crate::core::models::{CheckOptions, RunReport};
use crate::core::registry::Registry;
use crate::core::services::rollup;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    /// The selection named keys that are not registered
    #[error("unknown check key(s): {}", .0.join(", "))]
    UnknownChecks(Vec<String>),

    /// The selection was given but named no checks
    #[error("no valid checks selected")]
    NoChecksSelected,

    /// Cancellation was requested before all checks ran
    #[error("run cancelled")]
    Cancelled,

    /// A check failed with an unexpected error
    #[error("check {key}: {source}")]
    Check {
        /// Key of the failing check
        key: String,
        /// Underlying error
        #[source]
        source: CheckError,
    },
}

/// Which checks a run executes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every registered check
    #[default]
    All,
    /// Only the named keys (still executed in registration order)
    Only(Vec<String>),
}

impl Selection {
    /// Parse a comma-separated key list; `None` or blank input selects all
    ///
    /// Items are trimmed and empty items dropped, so `" , "` yields an empty
    /// `Only` selection.
    #[must_use]
    pub fn from_csv(csv: Option<&str>) -> Self {
        match csv {
            None => Self::All,
            Some(s) if s.is_empty() => Self::All,
            Some(s) => Self::Only(
                s.split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
        }
    }

    /// Build from an optional list of keys
    #[must_use]
    pub fn from_keys(keys: Option<Vec<String>>) -> Self {
        keys.map_or(Self::All, Self::Only)
    }

    /// Verify every named key is registered
    ///
    /// Unknown keys are reported together, sorted and de-duplicated.
    pub fn validate(&self, registry: &Registry) -> Result<(), RunError> {
        let Self::Only(keys) = self else {
            return Ok(());
        };
        let unknown: BTreeSet<&str> = keys
            .iter()
            .map(String::as_str)
            .filter(|k| !registry.contains(k))
            .collect();
        if !unknown.is_empty() {
            return Err(RunError::UnknownChecks(
                unknown.into_iter().map(str::to_string).collect(),
            ));
        }
        if keys.is_empty() {
            return Err(RunError::NoChecksSelected);
        }
        Ok(())
    }

    /// Whether a check key is part of this selection
    #[must_use]
    pub fn includes(&self, key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(keys) => keys.iter().any(|k| k == key),
        }
    }
}

/// Cooperative cancellation signal shared with the runner
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// New, unset flag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; checks not yet started are skipped
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Executes checks from a registry
#[derive(Debug)]
pub struct Runner<'a> {
    registry: &'a Registry,
    options: CheckOptions,
    selection: Selection,
    cancel: CancelFlag,
}

impl<'a> Runner<'a> {
    /// Runner over every check in `registry`, read-only, never cancelled
    #[must_use]
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            options: CheckOptions::default(),
            selection: Selection::All,
            cancel: CancelFlag::new(),
        }
    }

    /// Options passed to every check
    #[must_use]
    pub const fn options(mut self, options: CheckOptions) -> Self {
        self.options = options;
        self
    }

    /// Restrict the run to a selection
    #[must_use]
    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Observe `cancel` before each check
    #[must_use]
    pub fn cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run the selected checks against `root`
    ///
    /// Findings are concatenated in registration order; within a check they
    /// keep the order the check produced.
    pub fn run(&self, root: &Path) -> Result<RunReport, RunError> {
        self.selection.validate(self.registry)?;

        let mut findings = Vec::new();
        let mut executed = Vec::new();

        for check in self.registry.iter() {
            if !self.selection.includes(check.key()) {
                log::debug!("skipping {} (not selected)", check.key());
                continue;
            }
            if self.cancel.is_cancelled() {
                log::warn!("cancelled before {}", check.key());
                return Err(RunError::Cancelled);
            }

            log::debug!("running {}", check.key());
            let found = check
                .run(root, &self.options)
                .map_err(|source| RunError::Check {
                    key: check.key().to_string(),
                    source,
                })?;
            log::debug!("{} produced {} finding(s)", check.key(), found.len());

            executed.push(check.descriptor());
            findings.extend(found);
        }

        let statuses = rollup::check_statuses(&executed, &findings);
        let summary = rollup::summarize(&statuses);
        Ok(RunReport {
            findings,
            statuses,
            summary,
        })
    }
}
