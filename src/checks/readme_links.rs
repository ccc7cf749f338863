//! README link check
//!
//! Every local link in README.md must resolve: in-document anchors against
//! the README's own headings, file references against the repository root,
//! and fragments on Markdown targets against that file's headings.

use std::path::Path;

use crate::core::check::{self, Check, CheckError};
use crate::core::models::{CheckOptions, Finding};
use crate::core::services::markdown::{LinkProblem, LinkValidator};

const README: &str = "README.md";

/// Verifies README.md local file and anchor links resolve
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadmeLinksCheck;

fn message(problem: &LinkProblem) -> String {
    match problem {
        LinkProblem::UnknownAnchor { target } => format!("README link target not found: {target}"),
        LinkProblem::MissingFile { target } => format!("README link file not found: {target}"),
        LinkProblem::UnknownFragment { path, fragment } => {
            format!("README link anchor not found in {path}: #{fragment}")
        },
    }
}

impl Check for ReadmeLinksCheck {
    fn key(&self) -> &str {
        "readme_links"
    }

    fn description(&self) -> &str {
        "Verifies README.md local file and anchor links resolve"
    }

    fn run(&self, root: &Path, _options: &CheckOptions) -> Result<Vec<Finding>, CheckError> {
        // a missing README is the readme check's concern
        let Some(content) = check::read_optional(&root.join(README))? else {
            return Ok(Vec::new());
        };

        let problems = LinkValidator::new(root)
            .validate(&content)
            .map_err(|err| CheckError::io(err.path, err.source))?;

        Ok(problems
            .iter()
            .map(|problem| Finding::warn(self.key(), README, message(problem)))
            .collect())
    }
}
