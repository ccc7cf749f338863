//! Core domain logic for yardstick
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Finding, Severity, CheckStatus, RunReport)
//! - `check` - The `Check` trait every rule implements
//! - `registry` - Explicit, ordered set of checks
//! - `guidance` - Static rationale/remediation table
//! - `services/` - Markdown validation, status rollup, and the runner

pub mod check;
pub mod guidance;
pub mod models;
pub mod registry;
pub mod services;
