//! The check contract
//!
//! A check inspects a target root and returns findings. Missing artifacts,
//! malformed inputs, and unmet conventions are findings; a check returns
//! `Err` only when the environment itself cannot be trusted (an I/O failure
//! other than "not found").

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{CheckDescriptor, CheckOptions, Finding};

/// Errors that abort a check (and therefore the run)
#[derive(Debug, Error)]
pub enum CheckError {
    /// Unexpected filesystem failure
    #[error("io error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Filesystem failure while expanding a glob candidate
    #[error("glob error: {0}")]
    Glob(#[from] glob::GlobError),

    /// A glob candidate is not a valid pattern
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl CheckError {
    /// Wrap an I/O error with the path being accessed
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// An independently executable inspection rule
pub trait Check: Send + Sync {
    /// Stable unique key (e.g. `license`)
    fn key(&self) -> &str;

    /// One-line description
    fn description(&self) -> &str;

    /// Inspect `root` and report findings
    fn run(&self, root: &Path, options: &CheckOptions) -> Result<Vec<Finding>, CheckError>;

    /// Key and description as a plain value
    fn descriptor(&self) -> CheckDescriptor {
        CheckDescriptor {
            key: self.key().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Whether an I/O error means "the entry is not there"
///
/// `NotADirectory` covers lookups like `README.md/x` where a file sits in
/// the middle of the path.
#[must_use]
pub fn is_absent(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}

/// Whether an I/O error means the name itself cannot exist
///
/// Covers [`is_absent`] plus names the platform rejects outright, such as a
/// component that is too long or contains a NUL byte. Anything else
/// (permissions, loops, device errors) is an environment failure.
#[must_use]
pub fn is_unresolvable(err: &io::Error) -> bool {
    is_absent(err)
        || matches!(err.kind(), io::ErrorKind::InvalidFilename | io::ErrorKind::InvalidInput)
}

/// Existence test that separates "absent" from real failures
pub fn exists(path: &Path) -> Result<bool, CheckError> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if is_absent(&err) => Ok(false),
        Err(err) => Err(CheckError::io(path, err)),
    }
}

/// Directory test with the same error split as [`exists`]
pub fn is_dir(path: &Path) -> Result<bool, CheckError> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if is_absent(&err) => Ok(false),
        Err(err) => Err(CheckError::io(path, err)),
    }
}

/// Regular-file test with the same error split as [`exists`]
pub fn is_file(path: &Path) -> Result<bool, CheckError> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if is_absent(&err) => Ok(false),
        Err(err) => Err(CheckError::io(path, err)),
    }
}

/// Read a UTF-8 file, mapping absence to `None`
///
/// A directory sitting where the file is expected counts as absent.
pub fn read_optional(path: &Path) -> Result<Option<String>, CheckError> {
    if is_dir(path)? {
        return Ok(None);
    }
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(err) if is_absent(&err) => Ok(None),
        Err(err) => Err(CheckError::io(path, err)),
    }
}
