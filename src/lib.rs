//! bib-listing: turn a BibTeX bibliography into a website publication listing.
//!
//! This library provides functionality to:
//! - Split a `.bib` file into individual entries
//! - Render each entry through pandoc and scrape its output for fields
//! - Normalize categories and venues, resolve links, and rank a target author
//! - Emit the listing data file and its page-definition document

pub mod bibtex;
pub mod config;
pub mod extract;
pub mod output;
pub mod pandoc;
pub mod pipeline;
pub mod rank;

pub use bibtex::split_entries;
pub use config::Config;
pub use extract::{extract_record, FrameTrim, Record};
pub use output::{
    flatten_record, link_lines, render_data_file, render_page, LinkSource, ListingOptions,
};
pub use pandoc::{find_pandoc, locate_pandoc, render_entry, RenderError};
pub use pipeline::{build_listing, ListingBuild, RunStats};
pub use rank::{rank_author, AuthorRank};
