//! Current changelog section extraction.
//!
//! A changelog is read as a flat list of lines. The "current" section is the
//! block right after the first top-level heading (`# `) and runs up to, but
//! not including, the next top-level heading. Sub-headings such as
//! `## Bugfixes` are ordinary content and are kept verbatim.
//!
//! ```
//! use reltool_core::changelog::current_section;
//!
//! let lines = ["# Unreleased", "## Bugfixes", "- fix parser", "# 1.0.0", "- initial"];
//! assert_eq!(current_section(lines), ["## Bugfixes", "- fix parser"]);
//! ```

use std::borrow::Cow;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::{debug, instrument};

/// Prefix marking a top-level heading line.
pub const TOP_LEVEL_HEADING: &str = "# ";

/// Errors from reading a changelog file.
#[derive(Error, Debug)]
pub enum ChangelogError {
    /// The changelog file could not be read.
    #[error("failed to read changelog {path}: {source}")]
    Read {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Result alias for changelog operations.
pub type ChangelogResult<T> = Result<T, ChangelogError>;

/// Returns `true` if `line` starts a new top-level section.
pub fn is_top_level_heading(line: &str) -> bool {
    line.starts_with(TOP_LEVEL_HEADING)
}

/// Extract the lines of the current (first) section.
///
/// Returns an empty list when the input is empty or the first line is not a
/// top-level heading.
pub fn current_section<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter();
    match lines.next() {
        Some(first) if is_top_level_heading(first) => lines
            .take_while(|line| !is_top_level_heading(line))
            .collect(),
        _ => Vec::new(),
    }
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split changelog text into lines on `\n` only.
///
/// Text ending with a newline yields a trailing empty line. Call
/// [`normalize_newlines`] first for text with other line endings.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Extract the current section from raw changelog text.
pub fn current_section_of(text: &str) -> Vec<&str> {
    current_section(split_lines(text))
}

/// Read a changelog file and extract its current section.
///
/// Line endings are normalized, so CRLF and CR-only files read the same as
/// LF files.
#[instrument(skip_all, fields(path = %path))]
pub fn read_current_section(path: &Utf8Path) -> ChangelogResult<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| ChangelogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let section: Vec<String> = current_section_of(&normalize_newlines(&text))
        .into_iter()
        .map(str::to_owned)
        .collect();
    debug!(lines = section.len(), "extracted current changelog section");
    Ok(section)
}
