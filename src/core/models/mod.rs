//! Domain models for yardstick
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Finding`] - one observation produced by a check
//! - [`Severity`] - ordered importance of a finding
//! - [`CheckDescriptor`] / [`CheckOptions`] - check identity and run flags
//! - [`CheckStatus`] / [`RunSummary`] / [`RunReport`] - per-run derived results

mod check;
mod finding;
mod severity;
mod status;

pub use check::{CheckDescriptor, CheckOptions};
pub use finding::Finding;
pub use severity::Severity;
pub use status::{CheckStatus, RunReport, RunSummary, SeverityCounts, Verdict};
