//! Ecosystem convention checks
//!
//! Each check is a no-op unless its ecosystem's marker file is present.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::check::{self, Check, CheckError};
use crate::core::models::{CheckOptions, Finding};

// ============================================================================
// JavaScript frameworks
// ============================================================================

/// Dependencies that mark a project as framework-based
pub const FRAMEWORK_DEPENDENCIES: [&str; 8] = [
    "next",
    "react-scripts",
    "vite",
    "nuxt",
    "@angular/core",
    "@sveltejs/kit",
    "gatsby",
    "@remix-run/react",
];

const PACKAGE_JSON: &str = "package.json";

/// The parts of package.json these checks care about
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    scripts: Option<HashMap<String, String>>,
    #[serde(default)]
    dependencies: Option<HashMap<String, String>>,
    #[serde(default)]
    dev_dependencies: Option<HashMap<String, String>>,
}

impl PackageJson {
    fn has_script(&self, name: &str) -> bool {
        self.scripts.as_ref().is_some_and(|s| s.contains_key(name))
    }

    fn depends_on(&self, name: &str) -> bool {
        [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flatten()
            .any(|deps| deps.contains_key(name))
    }

    fn frameworks(&self) -> Vec<&'static str> {
        FRAMEWORK_DEPENDENCIES
            .into_iter()
            .filter(|dep| self.depends_on(dep))
            .collect()
    }
}

/// Baseline script and layout conventions for JavaScript framework projects
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptFrameworkCheck;

impl Check for JavaScriptFrameworkCheck {
    fn key(&self) -> &str {
        "javascript_framework"
    }

    fn description(&self) -> &str {
        "Validates baseline conventions for JavaScript framework projects, including Next.js compatibility"
    }

    fn run(&self, root: &Path, _options: &CheckOptions) -> Result<Vec<Finding>, CheckError> {
        let Some(raw) = check::read_optional(&root.join(PACKAGE_JSON))? else {
            return Ok(Vec::new());
        };

        let pkg: PackageJson = match serde_json::from_str(&raw) {
            Ok(pkg) => pkg,
            Err(err) => {
                log::debug!("package.json parse failed: {err}");
                return Ok(vec![Finding::warn(
                    self.key(),
                    PACKAGE_JSON,
                    "package.json is not valid JSON. Fix JSON syntax so framework checks can run reliably",
                )]);
            },
        };

        let frameworks = pkg.frameworks();
        if frameworks.is_empty() {
            return Ok(Vec::new());
        }
        log::debug!("detected frameworks: {}", frameworks.join(", "));

        let mut findings = Vec::new();
        if !pkg.has_script("dev") {
            findings.push(Finding::warn(
                self.key(),
                PACKAGE_JSON,
                "Missing scripts.dev in package.json. Add a dev script for local development",
            ));
        }
        if !pkg.has_script("build") {
            findings.push(Finding::warn(
                self.key(),
                PACKAGE_JSON,
                "Missing scripts.build in package.json. Add a build script for CI and production builds",
            ));
        }

        if frameworks.contains(&"next") {
            if !pkg.has_script("start") {
                findings.push(Finding::warn(
                    self.key(),
                    PACKAGE_JSON,
                    "Next.js project missing scripts.start. Add a start script for runtime compatibility",
                ));
            }
            if !check::is_dir(&root.join("app"))? && !check::is_dir(&root.join("pages"))? {
                findings.push(Finding::warn(
                    self.key(),
                    ".",
                    "Next.js project missing both app/ and pages/. Add at least one routing directory",
                ));
            }
        }

        Ok(findings)
    }
}

// ============================================================================
// Python
// ============================================================================

/// Files whose presence counts as a Python test configuration
const PYTHON_TEST_CONFIGS: [&str; 4] = ["pytest.ini", "tox.ini", "noxfile.py", "setup.cfg"];

/// Baseline packaging and test conventions for Python projects
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonProjectCheck;

impl PythonProjectCheck {
    fn has_test_signal(root: &Path) -> Result<bool, CheckError> {
        if check::is_dir(&root.join("tests"))? {
            return Ok(true);
        }
        for name in PYTHON_TEST_CONFIGS {
            if check::exists(&root.join(name))? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Check for PythonProjectCheck {
    fn key(&self) -> &str {
        "python_project"
    }

    fn description(&self) -> &str {
        "Validates baseline conventions for Python projects"
    }

    fn run(&self, root: &Path, _options: &CheckOptions) -> Result<Vec<Finding>, CheckError> {
        let has_pyproject = check::exists(&root.join("pyproject.toml"))?;
        let has_requirements = check::exists(&root.join("requirements.txt"))?;
        if !has_pyproject && !has_requirements {
            return Ok(Vec::new());
        }

        let mut findings = Vec::new();
        if has_requirements && !has_pyproject {
            findings.push(Finding::warn(
                self.key(),
                "requirements.txt",
                "requirements.txt found without pyproject.toml. Add pyproject.toml for modern tooling and metadata interoperability",
            ));
        }
        if !Self::has_test_signal(root)? {
            findings.push(Finding::warn(
                self.key(),
                ".",
                "No Python test layout/config detected. Add tests/ or pytest/tox configuration to support CI validation",
            ));
        }
        Ok(findings)
    }
}

// ============================================================================
// Static sites
// ============================================================================

/// Minimal layout for Jekyll-style sites (triggered by `_config.yml`)
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSiteCheck;

impl StaticSiteCheck {
    fn has_markdown_page(dir: &Path) -> Result<bool, CheckError> {
        let entries = fs::read_dir(dir).map_err(|e| CheckError::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| CheckError::io(dir, e))?;
            let path = entry.path();
            let is_markdown = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "md" || ext == "markdown");
            if is_markdown && !check::is_dir(&path)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Check for StaticSiteCheck {
    fn key(&self) -> &str {
        "static_site"
    }

    fn description(&self) -> &str {
        "Validates minimal structure for static-site projects (e.g., Jekyll)"
    }

    fn run(&self, root: &Path, _options: &CheckOptions) -> Result<Vec<Finding>, CheckError> {
        if !check::exists(&root.join("_config.yml"))? {
            return Ok(Vec::new());
        }

        let mut findings = Vec::new();
        if !check::exists(&root.join("index.md"))? {
            findings.push(Finding::warn(
                self.key(),
                ".",
                "index.md missing. Add a landing page for the site",
            ));
        }

        let pages = root.join("pages");
        if !check::is_dir(&pages)? {
            findings.push(Finding::warn(
                self.key(),
                "pages",
                "pages/ directory missing. Create pages/ with markdown content",
            ));
        } else if !Self::has_markdown_page(&pages)? {
            findings.push(Finding::warn(
                self.key(),
                "pages",
                "pages/ has no markdown files. Add at least one .md page",
            ));
        }

        if !check::is_dir(&root.join("assets"))? {
            findings.push(Finding::warn(
                self.key(),
                "assets",
                "assets/ directory missing. Add assets/ for images, CSS, and JS",
            ));
        }

        Ok(findings)
    }
}
