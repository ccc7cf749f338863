//! yardstick - A repository hygiene checker
//!
//! Scans a project directory and reports missing or malformed repository
//! artifacts as a table or JSON document.

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

use std::process::ExitCode;

mod cli;

/// Main entry point for the yardstick CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("yardstick error: {err:#}");
            ExitCode::from(cli::FAILURE_EXIT)
        },
    }
}
