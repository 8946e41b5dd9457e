//! Field extraction from the formatter's output.
//!
//! Pandoc's standalone Markdown output frames the reference data in a fixed
//! number of header and footer lines; in between, the body follows a
//! `key: value` convention with repeated `- family: <name>` lines for the
//! author list. This module scrapes that body into a [`Record`] and applies
//! the category normalization rules.

use regex::Regex;
use serde::Deserialize;

/// The fixed-offset framing convention of the formatter's output.
///
/// Pandoc wraps the reference body in a three-line header (`---`, `nocite:`,
/// `references:`) and a two-line footer (`---` plus a trailing blank line).
/// That convention is fragile, so it lives here as the single configurable
/// parsing boundary: if the external tool's framing drifts, this is the one
/// place to fix.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrameTrim {
    /// Lines discarded at the head of the output.
    pub head: usize,
    /// Lines discarded at the tail of the output.
    pub tail: usize,
}

impl Default for FrameTrim {
    fn default() -> Self {
        Self { head: 3, tail: 2 }
    }
}

impl FrameTrim {
    /// Returns the body lines with the frame discarded.
    ///
    /// Output shorter than the frame itself yields an empty slice, which
    /// downstream turns into an empty record rather than a fault.
    pub fn body<'a>(&self, lines: &'a [String]) -> &'a [String] {
        if lines.len() < self.head + self.tail {
            return &[];
        }
        &lines[self.head..lines.len() - self.tail]
    }
}

/// One entry's scraped fields, plus its body lines.
///
/// `lines` is the formatter's body for this entry with the category remap
/// already applied in place; the remaining fields are the values the
/// pipeline derives new output lines from. Absent fields stay `None` and
/// their output lines are omitted later.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Body lines, owned, category remap applied.
    pub lines: Vec<String>,
    /// Author family names, in listed order.
    pub authors: Vec<String>,
    /// Publisher, as declared.
    pub publisher: Option<String>,
    /// Venue title: the container title, or the publisher for books.
    pub venue: Option<String>,
    /// Issue date.
    pub issued: Option<String>,
    /// DOI-like identifier.
    pub doi: Option<String>,
    /// Explicit link.
    pub url: Option<String>,
}

/// Scrapes one entry's formatter output into a [`Record`].
///
/// # Arguments
///
/// * `output` - The formatter's stdout lines for a single entry
/// * `frame` - The framing convention to discard
///
/// # Category normalization
///
/// A declared `book` is recategorized to `conference` with the publisher
/// substituted as the venue title; `article-journal` is recategorized to
/// `journal`; every other category passes through unchanged. The remap runs
/// after the field scan, so it does not depend on where the fields sit in
/// the body.
pub fn extract_record(output: &[String], frame: &FrameTrim) -> Record {
    let family_re = Regex::new(r"-\s+family:\s*(.*)").unwrap();

    let mut lines: Vec<String> = frame.body(output).to_vec();
    let mut authors = Vec::new();
    let mut publisher = None;
    let mut venue = None;
    let mut issued = None;
    let mut doi = None;
    let mut url = None;
    let mut category: Option<(usize, String)> = None;

    for (idx, line) in lines.iter().enumerate() {
        if let Some(cap) = family_re.captures(line) {
            authors.push(cap[1].trim().to_string());
        } else if let Some(value) = field_value(line, "publisher") {
            publisher = Some(value);
        } else if let Some(value) = field_value(line, "container-title") {
            venue = Some(value);
        } else if let Some(value) = field_value(line, "issued") {
            issued = Some(value);
        } else if let Some(value) = field_value(line, "doi") {
            doi = Some(value);
        } else if let Some(value) = field_value(line, "url") {
            url = Some(value);
        } else if let Some(value) = field_value(line, "type") {
            category = Some((idx, value));
        }
    }

    if let Some((idx, declared)) = category {
        match declared.as_str() {
            "book" => {
                lines[idx] = "  type: conference".to_string();
                venue = publisher.clone();
            }
            "article-journal" => {
                lines[idx] = "  type: journal".to_string();
            }
            _ => {}
        }
    }

    Record {
        lines,
        authors,
        publisher,
        venue,
        issued,
        doi,
        url,
    }
}

/// Returns the value of a `key: value` line, or None when the line is not
/// that field or the value is empty.
fn field_value(line: &str, key: &str) -> Option<String> {
    let rest = line.trim_start().strip_prefix(key)?.strip_prefix(':')?;
    let value = rest.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
