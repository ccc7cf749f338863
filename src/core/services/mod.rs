//! Business logic services
//!
//! - [`markdown`] - Markdown heading slugs and local link resolution
//! - [`rollup`] - per-check status and run summary
//! - [`runner`] - selection, cancellation, and ordered execution

pub mod markdown;
pub mod rollup;
pub mod runner;

pub use markdown::{LinkValidator, slugify};
pub use runner::{CancelFlag, RunError, Runner, Selection};
