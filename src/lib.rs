//! yardstick - A repository hygiene checker
//!
//! This library inspects a project directory for the artifacts and
//! conventions a healthy repository is expected to have (README sections,
//! resolvable README links, license, changelog, ownership, CI workflows,
//! ecosystem conventions) and reports findings with per-check guidance.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod checks;
pub mod config;
pub mod core;
pub mod output;
