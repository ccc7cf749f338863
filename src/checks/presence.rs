//! Generalized presence check
//!
//! One parameterized shape covers every "this artifact should exist" rule:
//! an ordered candidate list, the message to report when none match, and an
//! optional starter template for opt-in auto-remediation.
//!
//! ```
//! use yardstick::checks::presence::PresenceCheck;
//!
//! let check = PresenceCheck::new("security_policy", "Ensures SECURITY.md exists")
//!     .candidate("SECURITY.md")
//!     .candidate(".github/SECURITY.md")
//!     .missing_message("SECURITY.md missing. Add it in SECURITY.md or .github/SECURITY.md");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use glob::MatchOptions;

use crate::core::check::{self, Check, CheckError};
use crate::core::models::{CheckOptions, Finding};

/// Where a candidate may be found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Exact relative path (file or directory)
    Path(&'static str),
    /// Relative glob; only regular files count, matched case-insensitively
    Glob(&'static str),
}

impl Location {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Path(p) | Self::Glob(p) => p,
        }
    }
}

/// One acceptable location for the artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Where to look
    pub location: Location,
    /// Label reported on detection (e.g. `Rust` for `Cargo.toml`)
    pub label: Option<&'static str>,
}

/// Starter content written in fix mode
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Produces the file contents
    pub contents: fn() -> String,
    /// Finding message reported after the file is written
    pub fixed_message: &'static str,
}

/// Succeeds when any candidate exists; otherwise reports one warning
#[derive(Debug, Clone)]
pub struct PresenceCheck {
    key: &'static str,
    description: &'static str,
    candidates: Vec<Candidate>,
    expected_at: Option<&'static str>,
    missing_message: &'static str,
    template: Option<Template>,
    report_detection: bool,
}

impl PresenceCheck {
    /// New check with no candidates yet
    #[must_use]
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            description,
            candidates: Vec::new(),
            expected_at: None,
            missing_message: "",
            template: None,
            report_detection: false,
        }
    }

    /// Add an exact-path candidate
    #[must_use]
    pub fn candidate(mut self, path: &'static str) -> Self {
        self.candidates.push(Candidate {
            location: Location::Path(path),
            label: None,
        });
        self
    }

    /// Add an exact-path candidate with a detection label
    #[must_use]
    pub fn labeled(mut self, path: &'static str, label: &'static str) -> Self {
        self.candidates.push(Candidate {
            location: Location::Path(path),
            label: Some(label),
        });
        self
    }

    /// Add a glob candidate
    #[must_use]
    pub fn glob(mut self, pattern: &'static str) -> Self {
        self.candidates.push(Candidate {
            location: Location::Glob(pattern),
            label: None,
        });
        self
    }

    /// Path reported when nothing matches (defaults to the first candidate)
    #[must_use]
    pub const fn expected_at(mut self, path: &'static str) -> Self {
        self.expected_at = Some(path);
        self
    }

    /// Message reported when nothing matches
    #[must_use]
    pub const fn missing_message(mut self, message: &'static str) -> Self {
        self.missing_message = message;
        self
    }

    /// Starter template used in fix mode
    #[must_use]
    pub const fn template(mut self, contents: fn() -> String, fixed_message: &'static str) -> Self {
        self.template = Some(Template {
            contents,
            fixed_message,
        });
        self
    }

    /// Report an info finding naming the first matching candidate
    #[must_use]
    pub const fn report_detection(mut self) -> Self {
        self.report_detection = true;
        self
    }

    /// Candidates in lookup order
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Canonical location of the artifact
    #[must_use]
    pub fn expected_location(&self) -> &'static str {
        self.expected_at
            .or_else(|| self.candidates.first().map(|c| c.location.as_str()))
            .unwrap_or(".")
    }

    fn find(root: &Path, location: Location) -> Result<Option<PathBuf>, CheckError> {
        match location {
            Location::Path(rel) => {
                let path = root.join(rel);
                Ok(check::exists(&path)?.then_some(path))
            },
            Location::Glob(pattern) => {
                let full = format!(
                    "{}/{pattern}",
                    glob::Pattern::escape(&root.to_string_lossy())
                );
                let options = MatchOptions {
                    case_sensitive: false,
                    require_literal_separator: true,
                    require_literal_leading_dot: false,
                };
                for entry in glob::glob_with(&full, options)? {
                    let path = entry?;
                    if check::is_file(&path)? {
                        return Ok(Some(path));
                    }
                }
                Ok(None)
            },
        }
    }

    fn write_template(&self, root: &Path, template: &Template) -> Result<(), CheckError> {
        let path = root.join(self.expected_location());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CheckError::io(parent, e))?;
        }
        fs::write(&path, (template.contents)()).map_err(|e| CheckError::io(&path, e))?;
        log::info!("{}: wrote {}", self.key, path.display());
        Ok(())
    }
}

impl Check for PresenceCheck {
    fn key(&self) -> &str {
        self.key
    }

    fn description(&self) -> &str {
        self.description
    }

    fn run(&self, root: &Path, options: &CheckOptions) -> Result<Vec<Finding>, CheckError> {
        for candidate in &self.candidates {
            let Some(found) = Self::find(root, candidate.location)? else {
                continue;
            };
            if !self.report_detection {
                return Ok(Vec::new());
            }
            let rel = relative_display(root, &found);
            let message = match candidate.label {
                Some(label) => format!("{label} project detected via {rel}"),
                None => format!("Found {rel}"),
            };
            return Ok(vec![Finding::info(self.key, rel, message)]);
        }

        if options.auto_fix
            && let Some(template) = &self.template
        {
            self.write_template(root, template)?;
            return Ok(vec![
                Finding::warn(self.key, self.expected_location(), template.fixed_message).fixed(),
            ]);
        }

        Ok(vec![Finding::warn(
            self.key,
            self.expected_location(),
            self.missing_message,
        )])
    }
}

/// `path` relative to `root` with `/` separators; `.` for the root itself
#[must_use]
pub fn relative_display(root: &Path, path: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return path.display().to_string();
    };
    let parts: Vec<_> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}
