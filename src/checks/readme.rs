//! README required-section check

use std::path::Path;

use crate::core::check::{self, Check, CheckError};
use crate::core::models::{CheckOptions, Finding};

const README: &str = "README.md";

/// Section headers every README should contain, in reporting order
pub const REQUIRED_SECTIONS: [&str; 5] = [
    "## Overview",
    "## Installation",
    "## Usage",
    "## CI",
    "## License",
];

/// Ensures README.md exists and includes the required sections
///
/// A header counts as present when its exact text occurs anywhere in the
/// document; level and position are not enforced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadmeCheck;

impl ReadmeCheck {
    fn missing_document_message() -> String {
        let names: Vec<&str> = REQUIRED_SECTIONS
            .iter()
            .map(|s| s.trim_start_matches('#').trim())
            .collect();
        format!(
            "{README} missing. Create {README} with sections: {}",
            names.join(", ")
        )
    }
}

impl Check for ReadmeCheck {
    fn key(&self) -> &str {
        "readme"
    }

    fn description(&self) -> &str {
        "Ensures README.md exists and includes required sections"
    }

    fn run(&self, root: &Path, _options: &CheckOptions) -> Result<Vec<Finding>, CheckError> {
        let Some(content) = check::read_optional(&root.join(README))? else {
            return Ok(vec![Finding::warn(
                self.key(),
                README,
                Self::missing_document_message(),
            )]);
        };

        Ok(REQUIRED_SECTIONS
            .iter()
            .filter(|section| !content.contains(*section))
            .map(|section| Finding::warn(self.key(), README, format!("Missing section: {section}")))
            .collect())
    }
}
