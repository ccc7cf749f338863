//! Tests for the Output module
//!
//! Reports can be rendered as an aligned table or a JSON document; both are
//! built only from the run report.

use yardstick::checks;
use yardstick::core::services::{Runner, Selection};
use yardstick::output::{OutputFormat, render_json, render_table};

use crate::common::TestRepo;

fn run(repo: &TestRepo, only: Option<&str>) -> yardstick::core::models::RunReport {
    let registry = checks::builtin().unwrap();
    Runner::new(&registry)
        .selection(Selection::from_csv(only))
        .run(repo.path())
        .unwrap()
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn json_document_has_all_sections() {
    let repo = TestRepo::new();
    let report = run(&repo, Some("license,readme_links"));

    let mut buf = Vec::new();
    render_json(&report, &mut buf).unwrap();
    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(v["summary"], "1 of 2 checks failed.");
    assert_eq!(v["checks"].as_array().unwrap().len(), 2);
    assert_eq!(v["checks"][0]["check"], "readme_links");
    assert_eq!(v["checks"][0]["status"], "pass");
    assert_eq!(v["checks"][1]["check"], "license");
    assert_eq!(v["checks"][1]["level"], "warn");
    assert!(v["checks"][1]["how_to_resolve"].is_string());
    assert_eq!(v["findings"][0]["check"], "license");
    assert_eq!(v["findings"][0]["message"], "LICENSE missing");
    assert_eq!(v["counts"]["warn"], 1);
    assert_eq!(v["counts"]["error"], 0);
}

#[test]
fn json_output_ends_with_newline() {
    let repo = TestRepo::healthy();
    let report = run(&repo, Some("license"));
    let mut buf = Vec::new();
    OutputFormat::Json.render(&report, &mut buf, false).unwrap();
    assert!(buf.ends_with(b"}\n"));
}

// =============================================================================
// Table
// =============================================================================

#[test]
fn table_lists_findings_then_guidance_then_summary() {
    let repo = TestRepo::new();
    let report = run(&repo, Some("changelog,license"));

    let mut buf = Vec::new();
    render_table(&report, &mut buf, false).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let header = text.find("CHECK").unwrap();
    let guidance = text.find("Guidance:").unwrap();
    let summary = text.find("2 of 2 checks failed.").unwrap();
    assert!(header < guidance && guidance < summary);
    assert!(text.lines().nth(1).unwrap().starts_with("changelog"));
    assert!(text.lines().nth(2).unwrap().starts_with("license"));
}

#[test]
fn uncolored_table_has_no_escape_codes() {
    let repo = TestRepo::new();
    let report = run(&repo, None);
    let mut buf = Vec::new();
    OutputFormat::Table.render(&report, &mut buf, false).unwrap();
    assert!(!buf.contains(&0x1b));
}
