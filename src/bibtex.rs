//! BibTeX entry splitter.
//!
//! Splits the raw text of a `.bib` file into individual entry strings, each
//! beginning with its `@` marker, so that every entry can be handed to the
//! external formatter on its own.

/// Splits raw bibliography text into individual BibTeX entries.
///
/// Entries are delimited by an `@` at the start of a line. The split consumes
/// that marker, so it is restored on every fragment; the first fragment only
/// gets one prepended when it does not already carry it. Leading and trailing
/// whitespace around the whole input is tolerated, and fragments that are
/// empty after splitting (including an empty trailing fragment left by a
/// terminal marker) are dropped.
///
/// # Arguments
///
/// * `bib` - The full text of a `.bib` file
///
/// # Returns
///
/// One string per entry, each starting with `@`. An input with zero entries
/// yields an empty vector.
///
/// # Examples
///
/// ```
/// use bib_listing::split_entries;
///
/// let entries = split_entries("@article{a,\n}\n\n@book{b,\n}\n");
/// assert_eq!(entries.len(), 2);
/// assert!(entries[1].starts_with("@book"));
///
/// assert!(split_entries("   \n  ").is_empty());
/// ```
pub fn split_entries(bib: &str) -> Vec<String> {
    let trimmed = bib.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut entries = Vec::new();
    let mut fragments = trimmed.split("\n@");

    // The first fragment keeps its own marker when it has one; anything
    // before the first marker still becomes a fragment and is left to the
    // formatter to reject.
    if let Some(first) = fragments.next() {
        let first = first.trim();
        if !first.is_empty() {
            if first.starts_with('@') {
                entries.push(first.to_string());
            } else {
                entries.push(format!("@{}", first));
            }
        }
    }

    // Every later fragment lost its marker to the split; restore it.
    for fragment in fragments {
        if !fragment.trim().is_empty() {
            entries.push(format!("@{}", fragment));
        }
    }

    entries
}
