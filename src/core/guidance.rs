//! Static guidance table
//!
//! Why each check matters and how to resolve a failure. The table is
//! read-only process-wide data; a key without an entry is legal and simply
//! renders without guidance.

/// Rationale and remediation text for one check key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidanceEntry {
    /// Check key this entry belongs to
    pub check_key: &'static str,
    /// Why the check matters
    pub why_important: &'static str,
    /// How to resolve a failure
    pub how_to_resolve: &'static str,
}

static GUIDANCE: &[GuidanceEntry] = &[
    GuidanceEntry {
        check_key: "manifest",
        why_important: "A manifest helps tools and contributors understand the project stack and dependency model.",
        how_to_resolve: "Add a standard manifest for your ecosystem, for example go.mod, package.json, pyproject.toml, or Cargo.toml.",
    },
    GuidanceEntry {
        check_key: "readme",
        why_important: "A complete README reduces onboarding friction and clarifies project usage for contributors and consumers.",
        how_to_resolve: "Create or update README.md to include Overview, Installation, Usage, CI, and License sections.",
    },
    GuidanceEntry {
        check_key: "readme_links",
        why_important: "Broken README links reduce trust and block readers from important docs and setup instructions.",
        how_to_resolve: "Fix invalid local links and anchors in README.md so each referenced file and heading exists.",
    },
    GuidanceEntry {
        check_key: "license",
        why_important: "A license defines legal reuse terms and protects both maintainers and users.",
        how_to_resolve: "Add a LICENSE file with the license your project intends to use, for example MIT or Apache-2.0.",
    },
    GuidanceEntry {
        check_key: "gitignore",
        why_important: "A .gitignore prevents accidental commits of build artifacts, secrets, and machine-local files.",
        how_to_resolve: "Add a .gitignore tuned to your stack to exclude artifacts, editor files, and OS-specific files.",
    },
    GuidanceEntry {
        check_key: "changelog",
        why_important: "A changelog helps users and maintainers track behavior changes across releases.",
        how_to_resolve: "Add CHANGELOG.md and document notable changes per release, ideally using Keep a Changelog format.",
    },
    GuidanceEntry {
        check_key: "codeowners",
        why_important: "CODEOWNERS clarifies review responsibility and improves governance in collaborative repositories.",
        how_to_resolve: "Add CODEOWNERS in a standard location and map key paths to responsible reviewers.",
    },
    GuidanceEntry {
        check_key: "contributing",
        why_important: "Contribution guidelines reduce confusion and improve consistency for incoming changes.",
        how_to_resolve: "Add CONTRIBUTING.md covering setup, coding standards, test expectations, and PR process.",
    },
    GuidanceEntry {
        check_key: "security_policy",
        why_important: "A security policy provides a clear process for responsible vulnerability reporting.",
        how_to_resolve: "Add SECURITY.md with reporting channels, expected response timelines, and disclosure expectations.",
    },
    GuidanceEntry {
        check_key: "ci_workflow",
        why_important: "CI workflows enforce baseline quality checks before changes are merged.",
        how_to_resolve: "Add at least one workflow file under .github/workflows to run build and test checks.",
    },
    GuidanceEntry {
        check_key: "javascript_framework",
        why_important: "Framework projects without standard scripts are hard to run locally and to build in CI.",
        how_to_resolve: "Add dev and build scripts to package.json; Next.js projects also need a start script and an app/ or pages/ directory.",
    },
    GuidanceEntry {
        check_key: "python_project",
        why_important: "Modern packaging metadata and a discoverable test layout let tooling and CI work without guesswork.",
        how_to_resolve: "Add pyproject.toml and a tests/ directory or pytest/tox configuration.",
    },
    GuidanceEntry {
        check_key: "static_site",
        why_important: "A minimal static-site structure improves reliability for builds, hosting, and navigation.",
        how_to_resolve: "Add index.md, a pages/ directory with markdown content, and an assets/ directory for static files.",
    },
];

/// Look up guidance for a check key
#[must_use]
pub fn guidance_for(check_key: &str) -> Option<&'static GuidanceEntry> {
    GUIDANCE.iter().find(|g| g.check_key == check_key)
}
