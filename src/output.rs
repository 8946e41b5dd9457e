//! Output generation: record flattening, the listing data file, and the
//! page-definition document.
//!
//! The data file is a flat sequence of field lines, one group per surviving
//! entry; the page document is a templated header the listing renderer reads
//! to display the data file as a browsable table.

use serde::Deserialize;

use crate::extract::Record;
use crate::rank::AuthorRank;

/// A source a record link can be derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkSource {
    /// The DOI-like identifier, resolved through `https://doi.org/`.
    Doi,
    /// The explicit link field, used verbatim.
    Url,
}

/// Derives the `path:` lines for a record, in precedence order.
///
/// Every source present on the record emits a line. When several are
/// present, several `path:` lines appear; a renderer that reads fields
/// top-to-bottom and overwrites on duplicate keys resolves to the last one,
/// so later entries in the precedence list override earlier ones. The order
/// is configuration, not an accident of emission order.
pub fn link_lines(record: &Record, precedence: &[LinkSource]) -> Vec<String> {
    let mut lines = Vec::new();
    for source in precedence {
        match source {
            LinkSource::Doi => {
                if let Some(doi) = &record.doi {
                    lines.push(format!("  path: https://doi.org/{}", doi));
                }
            }
            LinkSource::Url => {
                if let Some(url) = &record.url {
                    lines.push(format!("  path: {}", url));
                }
            }
        }
    }
    lines
}

/// Flattens one record into its output field lines.
///
/// The record's body lines come first, in the formatter's insertion order;
/// the derived fields are appended afterward: venue title, date, links, and
/// finally the author rank. Lines for absent fields are omitted.
pub fn flatten_record(
    record: &Record,
    rank: &AuthorRank,
    precedence: &[LinkSource],
) -> Vec<String> {
    let mut lines = record.lines.clone();

    if let Some(venue) = &record.venue {
        lines.push(format!("  type-title: '*{}*'", venue));
    }
    if let Some(issued) = &record.issued {
        lines.push(format!("  date: {}", issued));
    }
    lines.extend(link_lines(record, precedence));
    lines.push(format!("  position: '{}'", rank));

    lines
}

/// Joins the accumulated field lines into the data file's text.
///
/// One newline-joined block, terminated with a trailing newline. Written
/// once; never mutated after.
pub fn render_data_file(lines: &[String]) -> String {
    format!("{}\n", lines.join("\n"))
}

/// Display, sort, and filter configuration for the listing renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListingOptions {
    /// Page title prefix; the first-author split is appended.
    pub title: String,
    /// Records per page.
    pub page_size: usize,
    /// Sort key and direction, e.g. `date desc`.
    pub sort: String,
    /// Fields offered for interactive sorting.
    pub sort_ui: Vec<String>,
    /// Fields offered for interactive filtering.
    pub filter_ui: Vec<String>,
    /// Fields displayed in the table.
    pub fields: Vec<String>,
    /// Display label per field, in emission order.
    pub field_display_names: Vec<(String, String)>,
}

impl Default for ListingOptions {
    fn default() -> Self {
        let strings = |raw: &[&str]| raw.iter().map(|s| s.to_string()).collect();
        Self {
            title: "Publications".to_string(),
            page_size: 10,
            sort: "date desc".to_string(),
            sort_ui: strings(&["date", "title", "type", "type-title", "position"]),
            filter_ui: strings(&["date", "title", "type", "type-title"]),
            fields: strings(&["date", "title", "type", "type-title", "position"]),
            field_display_names: [
                ("date", "Date"),
                ("type", "Type"),
                ("type-title", "Type Name"),
                ("position", "Rank"),
            ]
            .iter()
            .map(|(f, l)| (f.to_string(), l.to_string()))
            .collect(),
        }
    }
}

/// Renders the page-definition document.
///
/// # Arguments
///
/// * `first_author` - Count of entries where the target author is first-listed
/// * `total_entries` - Total entry count, failed renders included
/// * `data_file` - File name of the listing data file
/// * `options` - Listing display configuration
pub fn render_page(
    first_author: usize,
    total_entries: usize,
    data_file: &str,
    options: &ListingOptions,
) -> String {
    let co_author = total_entries.saturating_sub(first_author);

    let display_names = options
        .field_display_names
        .iter()
        .map(|(field, label)| format!("    {}: {}", field, label))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "---
title: '{title} ({first} + {co})'
title-block-banner: true
date-format: 'MMMM,<br>YYYY'
listing:
  contents:
    - {data_file}
  page-size: {page_size}
  sort: '{sort}'
  type: table
  categories: false
  sort-ui: [{sort_ui}]
  filter-ui: [{filter_ui}]
  fields: [{fields}]
  field-display-names:
{display_names}
---
",
        title = options.title,
        first = first_author,
        co = co_author,
        data_file = data_file,
        page_size = options.page_size,
        sort = options.sort,
        sort_ui = options.sort_ui.join(", "),
        filter_ui = options.filter_ui.join(", "),
        fields = options.fields.join(", "),
        display_names = display_names,
    )
}
