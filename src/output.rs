//! Output formatting for table and JSON modes
//!
//! Renderers consume only a finished [`RunReport`] and write into any
//! [`Write`], so the binary can target stdout and tests can target a buffer.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use colored::Colorize;
use serde::Serialize;
use thiserror::Error;

use crate::core::models::{
    CheckDescriptor, CheckStatus, Finding, RunReport, Severity, SeverityCounts, Verdict,
};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned human-readable table (default)
    #[default]
    Table,
    /// Pretty-printed JSON document
    Json,
}

/// Unsupported `--format` value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Anything other than `table` or `json`
    #[error("invalid format \"{0}\", expected table or json")]
    Unsupported(String),
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(FormatError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl OutputFormat {
    /// Render `report` in this format
    pub fn render(self, report: &RunReport, out: &mut impl Write, color: bool) -> io::Result<()> {
        match self {
            Self::Table => render_table(report, out, color),
            Self::Json => render_json(report, out),
        }
    }
}

// ============================================================================
// JSON
// ============================================================================

/// Serialized form of one check status
#[derive(Debug, Serialize)]
struct JsonCheck<'a> {
    check: &'a str,
    description: &'a str,
    status: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<Severity>,
    findings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    why_important: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    how_to_resolve: Option<&'static str>,
}

impl<'a> From<&'a CheckStatus> for JsonCheck<'a> {
    fn from(status: &'a CheckStatus) -> Self {
        Self {
            check: &status.check_key,
            description: &status.description,
            status: status.verdict,
            level: status.severity,
            findings: status.findings_count,
            why_important: status.guidance.map(|g| g.why_important),
            how_to_resolve: status.guidance.map(|g| g.how_to_resolve),
        }
    }
}

/// Serialized form of a whole run
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    summary: &'a str,
    checks: Vec<JsonCheck<'a>>,
    findings: &'a [Finding],
    counts: SeverityCounts,
}

/// Write `report` as a pretty-printed JSON document followed by a newline
pub fn render_json(report: &RunReport, out: &mut impl Write) -> io::Result<()> {
    let doc = JsonReport {
        summary: &report.summary.text,
        checks: report.statuses.iter().map(JsonCheck::from).collect(),
        findings: &report.findings,
        counts: report.counts(),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}

// ============================================================================
// Table
// ============================================================================

const HEADERS: [&str; 5] = ["CHECK", "LEVEL", "PATH", "MESSAGE", "FIXED"];
const GUTTER: usize = 2;

fn colorize_level(cell: &str, severity: Severity) -> String {
    match severity {
        Severity::Info => cell.cyan().to_string(),
        Severity::Warn => cell.yellow().to_string(),
        Severity::Error => cell.red().bold().to_string(),
    }
}

/// Findings ordered by check key, then path (stable)
#[must_use]
pub fn sorted_findings(findings: &[Finding]) -> Vec<&Finding> {
    let mut sorted: Vec<&Finding> = findings.iter().collect();
    sorted.sort_by(|a, b| {
        a.check_key
            .cmp(&b.check_key)
            .then_with(|| a.path.cmp(&b.path))
    });
    sorted
}

/// Write `report` as an aligned table, guidance for failing checks, and the summary
///
/// With `color`, level cells are highlighted; padding is computed on the
/// plain text so columns stay aligned either way.
pub fn render_table(report: &RunReport, out: &mut impl Write, color: bool) -> io::Result<()> {
    let findings = sorted_findings(&report.findings);

    if !findings.is_empty() {
        let rows: Vec<[String; 5]> = findings
            .iter()
            .map(|f| {
                [
                    f.check_key.clone(),
                    f.severity.to_string(),
                    f.path.clone().unwrap_or_default(),
                    f.message.clone(),
                    f.fixed.to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header: [String; 5] = HEADERS.map(str::to_string);
        write_row(out, &header, &widths, None)?;
        for (row, finding) in rows.iter().zip(&findings) {
            write_row(out, row, &widths, color.then_some(finding.severity))?;
        }
    }

    let failing: Vec<&CheckStatus> = report.statuses.iter().filter(|s| !s.passed()).collect();
    if failing.iter().any(|s| s.guidance.is_some()) {
        writeln!(out)?;
        writeln!(out, "Guidance:")?;
        for status in failing {
            let Some(guidance) = status.guidance else {
                continue;
            };
            let level = status.severity.map_or_else(String::new, |s| format!(" ({s})"));
            writeln!(out, "  {}{level}", status.check_key)?;
            writeln!(out, "    Why: {}", guidance.why_important)?;
            writeln!(out, "    Fix: {}", guidance.how_to_resolve)?;
        }
    }

    if !report.findings.is_empty() {
        writeln!(out)?;
    }
    writeln!(out, "{}", report.summary.text)
}

fn write_row(
    out: &mut impl Write,
    cells: &[String; 5],
    widths: &[usize; 5],
    highlight: Option<Severity>,
) -> io::Result<()> {
    let mut line = String::new();
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let padded = if i == last {
            cell.clone()
        } else {
            format!("{cell:<w$}", w = width + GUTTER)
        };
        match highlight {
            Some(severity) if i == 1 => line.push_str(&colorize_level(&padded, severity)),
            _ => line.push_str(&padded),
        }
    }
    writeln!(out, "{}", line.trim_end())
}

/// Write `key - description` for each descriptor
pub fn render_list(descriptors: &[CheckDescriptor], out: &mut impl Write) -> io::Result<()> {
    for d in descriptors {
        writeln!(out, "{} - {}", d.key, d.description)?;
    }
    Ok(())
}
