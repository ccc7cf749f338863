//! Configuration management
//!
//! Settings come from up to three layers, highest precedence first:
//! command-line flags, the project file `<root>/.yardstick.toml`, and the
//! user file `~/.config/yardstick/config.toml` (XDG standard). Every key is
//! optional; anything left unset falls through to the built-in default.
//!
//! ```toml
//! format = "json"
//! strict = true
//! only = ["license", "readme"]
//! fix = false
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::check::is_absent;
use crate::core::models::CheckOptions;
use crate::core::services::runner::Selection;
use crate::output::{FormatError, OutputFormat};

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".yardstick.toml";

/// Directory under the platform config dir holding the user file
const GLOBAL_DIR: &str = "yardstick";

/// User configuration filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for the expected keys
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Get the user config file path, if the platform has a config dir
#[must_use]
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_DIR).join(GLOBAL_CONFIG_FILE))
}

/// Get the project config file path for `root`
#[must_use]
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG)
}

/// One configuration layer; `None` means "not set here"
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Output format (`table` or `json`)
    #[serde(default)]
    pub format: Option<String>,
    /// Treat warnings as policy violations
    #[serde(default)]
    pub strict: Option<bool>,
    /// Restrict the run to these check keys
    #[serde(default)]
    pub only: Option<Vec<String>>,
    /// Enable auto-remediation
    #[serde(default)]
    pub fix: Option<bool>,
}

impl Config {
    /// Load a layer from disk; a missing file is an empty layer
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if is_absent(&err) => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            },
        };
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Layer `self` over `lower`: keys set here win
    #[must_use]
    pub fn over(self, lower: Self) -> Self {
        Self {
            format: self.format.or(lower.format),
            strict: self.strict.or(lower.strict),
            only: self.only.or(lower.only),
            fix: self.fix.or(lower.fix),
        }
    }

    /// Project file layered over the user file
    ///
    /// `global` is passed explicitly so callers (and tests) control which
    /// user file is consulted.
    pub fn discover(root: &Path, global: Option<&Path>) -> Result<Self, ConfigError> {
        let global = match global {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        let project = Self::load(&project_config_path(root))?;
        Ok(project.over(global))
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--format`
    pub format: Option<String>,
    /// `--strict` (only ever switches it on)
    pub strict: bool,
    /// `--only`, comma-separated
    pub only: Option<String>,
    /// `--fix` (only ever switches it on)
    pub fix: bool,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Report format
    pub format: OutputFormat,
    /// Warnings count as violations
    pub strict: bool,
    /// Checks to run
    pub selection: Selection,
    /// Auto-remediation enabled
    pub fix: bool,
}

impl Settings {
    /// Resolve command-line overrides over a merged file layer
    ///
    /// The format is validated here, before anything runs.
    pub fn resolve(overrides: Overrides, file: Config) -> Result<Self, FormatError> {
        let format = match overrides.format.or(file.format) {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };
        let selection = match overrides.only {
            Some(csv) => Selection::from_csv(Some(csv.as_str())),
            None => Selection::from_keys(file.only),
        };
        Ok(Self {
            format,
            strict: overrides.strict || file.strict.unwrap_or(false),
            selection,
            fix: overrides.fix || file.fix.unwrap_or(false),
        })
    }

    /// Check options derived from these settings
    #[must_use]
    pub const fn check_options(&self) -> CheckOptions {
        if self.fix {
            CheckOptions::with_fix()
        } else {
            CheckOptions::read_only()
        }
    }
}
