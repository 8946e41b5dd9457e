//! The per-entry transformation pipeline.
//!
//! Drives one entry at a time through rendering, extraction, ranking, and
//! flattening, accumulating the output lines and the run statistics. Fully
//! sequential; the only scoped resource is the renderer's scratch file.

use std::path::Path;

use log::{debug, warn};

use crate::bibtex::split_entries;
use crate::config::Config;
use crate::extract::extract_record;
use crate::output::flatten_record;
use crate::pandoc::render_entry;
use crate::rank::rank_author;

/// Accumulator state threaded explicitly through the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Entries found in the input, failed renders included.
    pub entries: usize,
    /// Entries where the target author is first-listed.
    pub first_author: usize,
    /// Entries skipped because their render failed.
    pub skipped: usize,
}

/// The accumulated listing output plus run statistics.
#[derive(Debug, Clone, Default)]
pub struct ListingBuild {
    /// Flattened field lines for every surviving record.
    pub lines: Vec<String>,
    /// Run statistics for the summary and the page title.
    pub stats: RunStats,
}

/// Runs the pipeline over the raw bibliography text.
///
/// Each entry is rendered, scraped, normalized, ranked, and flattened to
/// completion before the next begins. An entry whose render fails is logged
/// and skipped; partial failure never aborts the run, and every entry
/// produces at most one output record.
///
/// # Arguments
///
/// * `bib` - The full text of the bibliography file
/// * `config` - Pipeline configuration
/// * `pandoc` - Path to the external formatter binary
pub fn build_listing(bib: &str, config: &Config, pandoc: &Path) -> ListingBuild {
    let entries = split_entries(bib);

    let mut build = ListingBuild {
        lines: Vec::new(),
        stats: RunStats {
            entries: entries.len(),
            ..RunStats::default()
        },
    };

    for (idx, entry) in entries.iter().enumerate() {
        let output = match render_entry(pandoc, entry) {
            Ok(output) => output,
            Err(e) => {
                warn!("skipping entry {}: {}", idx + 1, e);
                build.stats.skipped += 1;
                continue;
            }
        };

        let record = extract_record(&output, &config.frame);
        if record.lines.is_empty() {
            debug!(
                "entry {}: formatter output shorter than the {}+{} line frame",
                idx + 1,
                config.frame.head,
                config.frame.tail
            );
        }

        let rank = rank_author(&record.authors, &config.author);
        if rank.is_first() {
            build.stats.first_author += 1;
        }

        build
            .lines
            .extend(flatten_record(&record, &rank, &config.links));
    }

    build
}
