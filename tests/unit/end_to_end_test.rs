//! Full-registry runs against fixture repositories

use std::collections::HashSet;

use yardstick::checks;
use yardstick::core::models::{CheckOptions, Finding, Severity, Verdict};
use yardstick::core::services::{RunError, Runner, Selection};

use crate::common::TestRepo;

const PRESENCE_KEYS: [&str; 7] = [
    "license",
    "gitignore",
    "changelog",
    "codeowners",
    "contributing",
    "security_policy",
    "ci_workflow",
];

// =============================================================================
// Empty repository
// =============================================================================

#[test]
fn empty_repo_warns_from_every_presence_check_and_manifest() {
    let repo = TestRepo::new();
    let registry = checks::builtin().unwrap();
    let report = Runner::new(&registry).run(repo.path()).unwrap();

    for key in PRESENCE_KEYS.iter().chain(&["manifest"]) {
        let own: Vec<&Finding> = report.findings.iter().filter(|f| f.check_key == *key).collect();
        assert_eq!(own.len(), 1, "{key}");
        assert_eq!(own[0].severity, Severity::Warn, "{key}");
    }

    assert_eq!(report.statuses.len(), 13);
    assert_eq!(report.summary.text, "9 of 13 checks failed.");
    assert!(!report.violates_policy(false));
    assert!(report.violates_policy(true));
}

#[test]
fn findings_follow_registration_order() {
    let repo = TestRepo::new();
    let registry = checks::builtin().unwrap();
    let report = Runner::new(&registry).run(repo.path()).unwrap();

    let mut seen: Vec<&str> = Vec::new();
    for f in &report.findings {
        if seen.last() != Some(&f.check_key.as_str()) {
            seen.push(&f.check_key);
        }
    }
    assert_eq!(
        seen,
        vec![
            "manifest",
            "readme",
            "license",
            "gitignore",
            "changelog",
            "codeowners",
            "contributing",
            "security_policy",
            "ci_workflow",
        ]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let repo = TestRepo::new();
    repo.add_file("README.md", "# Demo\n\n[broken](#nowhere)\n[gone](docs/missing.md)\n");
    repo.add_file("package.json", r#"{"dependencies": {"next": "14"}}"#);
    let registry = checks::builtin().unwrap();

    let first: HashSet<Finding> = Runner::new(&registry)
        .run(repo.path())
        .unwrap()
        .findings
        .into_iter()
        .collect();
    let second: HashSet<Finding> = Runner::new(&registry)
        .run(repo.path())
        .unwrap()
        .findings
        .into_iter()
        .collect();
    assert_eq!(first, second);
}

// =============================================================================
// Healthy repository
// =============================================================================

#[test]
fn healthy_repo_only_reports_the_detected_ecosystem() {
    let repo = TestRepo::healthy();
    let registry = checks::builtin().unwrap();
    let report = Runner::new(&registry).run(repo.path()).unwrap();

    assert_eq!(report.findings.len(), 1, "{:?}", report.findings);
    assert_eq!(report.findings[0].check_key, "manifest");
    assert_eq!(report.findings[0].severity, Severity::Info);
    assert_eq!(report.summary.text, "1 of 13 checks failed.");
    assert!(!report.violates_policy(true));

    let manifest = &report.statuses[0];
    assert_eq!(manifest.verdict, Verdict::Fail);
    assert_eq!(manifest.severity, Some(Severity::Info));
}

#[test]
fn fix_mode_makes_second_run_quieter() {
    let repo = TestRepo::new();
    let registry = checks::builtin().unwrap();
    let selection = Selection::from_csv(Some("license,gitignore,changelog"));

    let fixed = Runner::new(&registry)
        .options(CheckOptions::with_fix())
        .selection(selection.clone())
        .run(repo.path())
        .unwrap();
    assert_eq!(fixed.findings.len(), 3);
    assert!(fixed.findings.iter().all(|f| f.fixed));

    let after = Runner::new(&registry)
        .selection(selection)
        .run(repo.path())
        .unwrap();
    assert!(after.findings.is_empty());
    assert_eq!(after.summary.text, "All checks passed (3/3).");
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn unknown_key_aborts_before_running_anything() {
    let repo = TestRepo::new();
    let registry = checks::builtin().unwrap();
    let err = Runner::new(&registry)
        .options(CheckOptions::with_fix())
        .selection(Selection::from_csv(Some("license,nonexistent")))
        .run(repo.path())
        .unwrap_err();

    assert!(matches!(err, RunError::UnknownChecks(_)));
    assert!(err.to_string().contains("nonexistent"));
    assert!(!repo.exists("LICENSE"));
}

#[test]
fn blank_selection_list_is_rejected() {
    let repo = TestRepo::new();
    let registry = checks::builtin().unwrap();
    let err = Runner::new(&registry)
        .selection(Selection::from_csv(Some(" , ")))
        .run(repo.path())
        .unwrap_err();
    assert!(matches!(err, RunError::NoChecksSelected));
}

// =============================================================================
// Unusual repository shapes
// =============================================================================

#[test]
fn directories_in_place_of_files_are_reported_missing() {
    let repo = TestRepo::new();
    repo.add_dir("README.md");
    repo.add_dir("package.json");
    let registry = checks::builtin().unwrap();
    let report = Runner::new(&registry).run(repo.path()).unwrap();

    let readme: Vec<&Finding> = report.findings.iter().filter(|f| f.check_key == "readme").collect();
    assert_eq!(readme.len(), 1);
    assert!(readme[0].message.starts_with("README.md missing."));
    assert!(!report.findings.iter().any(|f| f.check_key == "readme_links"));
    assert!(!report.findings.iter().any(|f| f.check_key == "javascript_framework"));
}

#[test]
fn overlong_readme_link_is_a_finding() {
    let repo = TestRepo::new();
    let target = format!("{}.md", "a".repeat(300));
    repo.add_file("README.md", &format!("# T\n\n[x]({target})\n"));
    let registry = checks::builtin().unwrap();
    let report = Runner::new(&registry)
        .selection(Selection::from_csv(Some("readme_links")))
        .run(repo.path())
        .unwrap();

    assert_eq!(report.findings.len(), 1);
    assert_eq!(
        report.findings[0].message,
        format!("README link file not found: {target}")
    );
}

#[cfg(unix)]
#[test]
fn unreadable_link_target_aborts_the_run() {
    let repo = TestRepo::new();
    repo.add_file("README.md", "[l](loop.md)\n");
    std::os::unix::fs::symlink("loop.md", repo.path().join("loop.md")).unwrap();
    let registry = checks::builtin().unwrap();
    let err = Runner::new(&registry).run(repo.path()).unwrap_err();
    assert!(matches!(err, RunError::Check { ref key, .. } if key == "readme_links"));
}
