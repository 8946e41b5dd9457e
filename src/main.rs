//! CLI for bib-listing - Turn a BibTeX bibliography into a website
//! publication listing.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use bib_listing::{build_listing, locate_pandoc, render_data_file, render_page, Config};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Turn a BibTeX bibliography into a website publication listing
#[derive(Parser)]
#[command(name = "bib-listing")]
#[command(version)]
#[command(after_help = "\
Examples:
  bib-listing
  bib-listing refs/pubs.bib --author Stephens
  bib-listing --config site/bib-listing.toml

Outputs <input>.yml (listing data) and <input>.qmd (listing page) next to
the input file. Requires pandoc on PATH (or BIB_LISTING_PANDOC).")]
struct Cli {
    /// Input BibTeX file
    #[arg(default_value = "publications.bib")]
    bib: PathBuf,

    /// Author whose position is ranked in each entry
    #[arg(short, long)]
    author: Option<String>,

    /// Config file (default: ./bib-listing.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — input file not found / unreadable
    InputFile(String),
    /// Exit 11 — config file not found / invalid
    Config(String),
    /// Exit 12 — pandoc not found / not runnable
    Formatter(String),
    /// Exit 13 — cannot write an output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::Config(_) => 11,
            AppError::Formatter(_) => 12,
            AppError::OutputFile(_) => 13,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::Config(msg) => {
                write!(
                    f,
                    "{}\n  hint: the file must be TOML; unknown field names are rejected",
                    msg
                )
            }
            AppError::Formatter(msg) => {
                write!(
                    f,
                    "{}\n  hint: install pandoc from https://pandoc.org/installing.html",
                    msg
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // 1. The external formatter must be available before anything else is
    //    touched.
    let pandoc = locate_pandoc().map_err(|e| AppError::Formatter(e.to_string()))?;

    // 2. Load configuration; a CLI author flag overrides the config file
    let mut config = Config::load(cli.config.as_deref()).map_err(|e| {
        AppError::Config(match &cli.config {
            Some(path) => format!("'{}': {}", path.display(), e),
            None => e.to_string(),
        })
    })?;
    if let Some(author) = cli.author {
        config.author = author;
    }

    // 3. Read the bibliography
    let bib = fs::read_to_string(&cli.bib)
        .map_err(|e| AppError::InputFile(format!("'{}': {}", cli.bib.display(), e)))?;

    // 4. Run the pipeline
    let build = build_listing(&bib, &config, &pandoc);

    // 5. Write the data file, then the page that references it
    let yml_path = cli.bib.with_extension("yml");
    let qmd_path = cli.bib.with_extension("qmd");

    fs::write(&yml_path, render_data_file(&build.lines))
        .map_err(|e| AppError::OutputFile(format!("'{}': {}", yml_path.display(), e)))?;

    let data_file = yml_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| yml_path.display().to_string());
    let page = render_page(
        build.stats.first_author,
        build.stats.entries,
        &data_file,
        &config.listing,
    );
    fs::write(&qmd_path, page)
        .map_err(|e| AppError::OutputFile(format!("'{}': {}", qmd_path.display(), e)))?;

    println!(
        "processed {} of {} entries, wrote {} and {}",
        build.stats.entries - build.stats.skipped,
        build.stats.entries,
        yml_path.display(),
        qmd_path.display()
    );

    Ok(())
}
