//! Markdown link and anchor validation
//!
//! Scans a document for inline links and verifies that local targets
//! resolve: in-document `#anchors` against the document's own headings, and
//! file references against the filesystem (plus the target file's headings
//! when a fragment is given).
//!
//! Anchors are derived from headings with [`slugify`]:
//!
//! 1. lowercase the heading text
//! 2. keep letters and digits
//! 3. collapse each run of spaces, hyphens, and underscores into one `-`
//! 4. drop everything else
//! 5. trim leading and trailing `-`
//!
//! Repeated identical headings are NOT de-duplicated with numeric suffixes
//! (`#setup-1`); a link relying on such a suffix is reported unresolved.
//!
//! Anchor sets are rebuilt from current file contents every time they are
//! needed. Nothing is cached between links or runs.
//!
//! # Examples
//!
//! ```
//! use yardstick::core::services::markdown::{slugify, anchors};
//!
//! assert_eq!(slugify("Getting Started!"), "getting-started");
//! assert!(anchors("# Title\n\n## Getting Started!\n").contains("getting-started"));
//! ```

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// `[text](target)`; the preceding `!` of image syntax is checked separately
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]+\]\(([^)]+)\)").expect("link pattern is valid"));

const EXTERNAL_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "tel:"];

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Failure to read a referenced file for a reason other than absence
#[derive(Debug, Error)]
#[error("failed to read {}: {source}", path.display())]
pub struct ReadError {
    /// File that could not be read
    pub path: PathBuf,
    /// Underlying error
    #[source]
    pub source: io::Error,
}

/// What a link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `http(s)://`, `mailto:`, `tel:`; not verifiable locally
    External,
    /// `#anchor` within the same document
    InDocumentAnchor,
    /// Relative file path, optionally with `#fragment`
    FileReference,
}

/// A classified inline link target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target as written, after trimming whitespace and angle brackets
    pub raw_target: String,
    /// Classification
    pub kind: LinkKind,
    /// Path portion (empty for anchors and external links)
    pub path_part: String,
    /// Fragment after the first `#`, if non-empty
    pub fragment: Option<String>,
}

impl Link {
    /// Classify a raw link target
    ///
    /// Returns `None` for an empty target.
    #[must_use]
    pub fn classify(target: &str) -> Option<Self> {
        let target = target.trim().trim_matches(|c| c == '<' || c == '>');
        if target.is_empty() {
            return None;
        }

        let lower = target.to_lowercase();
        if EXTERNAL_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
            return Some(Self {
                raw_target: target.to_string(),
                kind: LinkKind::External,
                path_part: String::new(),
                fragment: None,
            });
        }

        if let Some(anchor) = target.strip_prefix('#') {
            return Some(Self {
                raw_target: target.to_string(),
                kind: LinkKind::InDocumentAnchor,
                path_part: String::new(),
                fragment: Some(anchor.to_string()),
            });
        }

        let (path_part, fragment) = match target.split_once('#') {
            Some((path, frag)) => (path, Some(frag)),
            None => (target, None),
        };
        Some(Self {
            raw_target: target.to_string(),
            kind: LinkKind::FileReference,
            path_part: path_part.to_string(),
            fragment: fragment.filter(|f| !f.is_empty()).map(str::to_string),
        })
    }
}

/// An unresolved local link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkProblem {
    /// `#anchor` with no matching heading in the same document
    UnknownAnchor {
        /// Target as written, including `#`
        target: String,
    },
    /// File reference whose path does not exist
    MissingFile {
        /// Target as written
        target: String,
    },
    /// Existing Markdown file without a heading for the fragment
    UnknownFragment {
        /// Path part of the target
        path: String,
        /// Fragment without `#`
        fragment: String,
    },
}

/// Anchor slug for a heading
#[must_use]
pub fn slugify(heading: &str) -> String {
    let lowered = heading.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut prev_dash = false;

    for ch in lowered.chars() {
        if ch.is_alphabetic() || ch.is_numeric() {
            slug.push(ch);
            prev_dash = false;
        } else if matches!(ch, ' ' | '-' | '_') && !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    slug.trim_matches('-').to_string()
}

/// Heading text of an ATX heading line (`#` to `######`, then whitespace)
fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

/// Heading texts in document order
#[must_use]
pub fn headings(content: &str) -> Vec<&str> {
    content.lines().filter_map(heading_text).collect()
}

/// Set of anchor slugs for every heading in `content`
///
/// Headings that slug to the empty string contribute nothing.
#[must_use]
pub fn anchors(content: &str) -> HashSet<String> {
    headings(content)
        .into_iter()
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .collect()
}

/// All inline links in `content`, in document order
///
/// Images (`![alt](src)`) and empty targets are skipped.
#[must_use]
pub fn extract_links(content: &str) -> Vec<Link> {
    LINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if content[..whole.start()].ends_with('!') {
                return None;
            }
            Link::classify(caps.get(1)?.as_str())
        })
        .collect()
}

fn looks_like_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Resolves local link targets relative to a root directory
#[derive(Debug, Clone, Copy)]
pub struct LinkValidator<'a> {
    root: &'a Path,
}

impl<'a> LinkValidator<'a> {
    /// Validator resolving file references against `root`
    #[must_use]
    pub const fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// Check every link in `content`, returning the unresolved ones in order
    ///
    /// A referenced path that does not exist, or whose name the platform
    /// rejects, is a problem; any other I/O failure while inspecting or
    /// reading it is returned as an error.
    pub fn validate(&self, content: &str) -> Result<Vec<LinkProblem>, ReadError> {
        let own_anchors = anchors(content);
        let mut problems = Vec::new();

        for link in extract_links(content) {
            match link.kind {
                LinkKind::External => {},
                LinkKind::InDocumentAnchor => {
                    let anchor = link.fragment.as_deref().unwrap_or_default();
                    if !own_anchors.contains(anchor) {
                        problems.push(LinkProblem::UnknownAnchor {
                            target: link.raw_target,
                        });
                    }
                },
                LinkKind::FileReference => {
                    if let Some(problem) = self.check_file_reference(&link)? {
                        problems.push(problem);
                    }
                },
            }
        }

        Ok(problems)
    }

    fn check_file_reference(&self, link: &Link) -> Result<Option<LinkProblem>, ReadError> {
        if link.path_part.is_empty() {
            return Ok(None);
        }
        let full_path = self.root.join(link.path_part.trim_start_matches('/'));

        let meta = match std::fs::metadata(&full_path) {
            Ok(meta) => meta,
            Err(err) if crate::core::check::is_unresolvable(&err) => {
                return Ok(Some(LinkProblem::MissingFile {
                    target: link.raw_target.clone(),
                }));
            },
            Err(source) => {
                return Err(ReadError {
                    path: full_path,
                    source,
                });
            },
        };

        let Some(fragment) = link.fragment.as_deref() else {
            return Ok(None);
        };
        if meta.is_dir() || !looks_like_markdown(&full_path) {
            return Ok(None);
        }

        let bytes = std::fs::read(&full_path).map_err(|source| ReadError {
            path: full_path.clone(),
            source,
        })?;
        if anchors(&String::from_utf8_lossy(&bytes)).contains(fragment) {
            Ok(None)
        } else {
            Ok(Some(LinkProblem::UnknownFragment {
                path: link.path_part.clone(),
                fragment: fragment.to_string(),
            }))
        }
    }
}
