//! Built-in checks
//!
//! The registry is assembled explicitly; a check runs only if it is listed
//! in [`builtin`], and it runs in the position it is listed.

pub mod ecosystem;
pub mod presence;
pub mod readme;
pub mod readme_links;
pub mod templates;

pub use ecosystem::{JavaScriptFrameworkCheck, PythonProjectCheck, StaticSiteCheck};
pub use presence::PresenceCheck;
pub use readme::ReadmeCheck;
pub use readme_links::ReadmeLinksCheck;

use crate::core::registry::{Registry, RegistryError};

/// Ecosystem detection by manifest file
#[must_use]
pub fn manifest() -> PresenceCheck {
    PresenceCheck::new(
        "manifest",
        "Detects project ecosystem by scanning for common manifests",
    )
    .labeled("go.mod", "Go")
    .labeled("package.json", "Node")
    .labeled("pyproject.toml", "Python")
    .labeled("requirements.txt", "Python")
    .labeled("Gemfile", "Ruby")
    .labeled("Cargo.toml", "Rust")
    .labeled("composer.json", "PHP")
    .labeled("_config.yml", "Static site")
    .labeled(".eleventy.js", "Static site")
    .labeled("mkdocs.yml", "Static site")
    .expected_at(".")
    .missing_message(
        "No common project manifest found. Expected one of: go.mod, package.json, \
         pyproject.toml, requirements.txt, Gemfile, Cargo.toml, composer.json, \
         _config.yml, .eleventy.js, or mkdocs.yml",
    )
    .report_detection()
}

/// LICENSE presence, scaffolds MIT
#[must_use]
pub fn license() -> PresenceCheck {
    PresenceCheck::new("license", "Ensures LICENSE file is present")
        .candidate("LICENSE")
        .missing_message("LICENSE missing")
        .template(templates::mit_license, "LICENSE missing, created MIT license")
}

/// .gitignore presence, scaffolds a starter list
#[must_use]
pub fn gitignore() -> PresenceCheck {
    PresenceCheck::new(
        "gitignore",
        ".gitignore includes common entries or is scaffolded if missing",
    )
    .candidate(".gitignore")
    .missing_message(".gitignore missing")
    .template(templates::gitignore, ".gitignore missing, created default entries")
}

/// CHANGELOG.md presence, scaffolds a starter file
#[must_use]
pub fn changelog() -> PresenceCheck {
    PresenceCheck::new("changelog", "Ensures CHANGELOG.md exists")
        .candidate("CHANGELOG.md")
        .missing_message("CHANGELOG.md missing")
        .template(
            templates::changelog,
            "CHANGELOG.md missing, created a starter file",
        )
}

/// CODEOWNERS in any standard GitHub location
#[must_use]
pub fn codeowners() -> PresenceCheck {
    PresenceCheck::new(
        "codeowners",
        "Ensures CODEOWNERS exists in a standard GitHub location",
    )
    .candidate("CODEOWNERS")
    .candidate(".github/CODEOWNERS")
    .candidate("docs/CODEOWNERS")
    .missing_message(
        "CODEOWNERS missing. Add ownership rules in CODEOWNERS, .github/CODEOWNERS, or docs/CODEOWNERS",
    )
}

/// CONTRIBUTING.md at the root or under .github
#[must_use]
pub fn contributing() -> PresenceCheck {
    PresenceCheck::new(
        "contributing",
        "Ensures CONTRIBUTING.md exists in a standard GitHub location",
    )
    .candidate("CONTRIBUTING.md")
    .candidate(".github/CONTRIBUTING.md")
    .missing_message(
        "CONTRIBUTING.md missing. Add contributor guidelines in CONTRIBUTING.md or .github/CONTRIBUTING.md",
    )
}

/// SECURITY.md at the root or under .github
#[must_use]
pub fn security_policy() -> PresenceCheck {
    PresenceCheck::new(
        "security_policy",
        "Ensures SECURITY.md exists in a standard GitHub location",
    )
    .candidate("SECURITY.md")
    .candidate(".github/SECURITY.md")
    .missing_message(
        "SECURITY.md missing. Add vulnerability reporting guidance in SECURITY.md or .github/SECURITY.md",
    )
}

/// At least one GitHub Actions workflow file
#[must_use]
pub fn ci_workflow() -> PresenceCheck {
    PresenceCheck::new(
        "ci_workflow",
        "Ensures at least one workflow file exists in .github/workflows",
    )
    .glob(".github/workflows/*.yml")
    .glob(".github/workflows/*.yaml")
    .expected_at(".github/workflows")
    .missing_message(
        "No workflow files found in .github/workflows. Add at least one .yml or .yaml file",
    )
}

/// Every built-in check in execution order
pub fn builtin() -> Result<Registry, RegistryError> {
    Registry::new()
        .with(manifest())?
        .with(ReadmeCheck)?
        .with(ReadmeLinksCheck)?
        .with(license())?
        .with(gitignore())?
        .with(changelog())?
        .with(codeowners())?
        .with(contributing())?
        .with(security_policy())?
        .with(ci_workflow())?
        .with(JavaScriptFrameworkCheck)?
        .with(PythonProjectCheck)?
        .with(StaticSiteCheck)
}
