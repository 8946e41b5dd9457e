//! External formatter invocation.
//!
//! Each bibliography entry is rendered by invoking `pandoc` as a blocking
//! subprocess: the entry is written to a transient scratch file, pandoc is
//! asked for standalone Markdown output, and its stdout is captured as a
//! sequence of lines for the field extractor to scrape.
//!
//! # Finding pandoc
//!
//! [`find_pandoc`] searches in this order:
//! 1. `BIB_LISTING_PANDOC` environment variable (direct path to the binary)
//! 2. System PATH via `which`

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Environment variable that overrides the formatter binary location.
pub const PANDOC_ENV: &str = "BIB_LISTING_PANDOC";

/// Errors that can occur while rendering an entry through pandoc.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("pandoc not found on PATH")]
    NotFound,

    #[error("failed to run pandoc: {0}")]
    Io(#[from] std::io::Error),

    #[error("pandoc exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Find the pandoc binary on the system.
///
/// An invalid `BIB_LISTING_PANDOC` value falls through to the PATH lookup.
///
/// # Returns
///
/// `Some(path)` if pandoc is found, `None` otherwise.
pub fn find_pandoc() -> Option<PathBuf> {
    if let Ok(override_path) = std::env::var(PANDOC_ENV) {
        let path = PathBuf::from(&override_path);
        if path.is_file() {
            return Some(path);
        }
    }

    which::which("pandoc").ok()
}

/// Locate and verify the formatter, for the up-front availability check.
///
/// # Errors
///
/// Returns [`RenderError::NotFound`] when no binary can be located, or the
/// verification error when the binary does not run.
pub fn locate_pandoc() -> Result<PathBuf, RenderError> {
    let pandoc = find_pandoc().ok_or(RenderError::NotFound)?;
    verify_pandoc(&pandoc)?;
    Ok(pandoc)
}

/// Check that the located binary actually runs, via `pandoc --version`.
pub fn verify_pandoc(pandoc: &Path) -> Result<(), RenderError> {
    let output = Command::new(pandoc).arg("--version").output()?;
    if !output.status.success() {
        return Err(RenderError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

/// Renders a single bibliography entry through pandoc.
///
/// The entry is written to a scratch `.bib` file, which is removed when this
/// function returns, on both the success and failure paths.
///
/// # Arguments
///
/// * `pandoc` - Path to the pandoc binary
/// * `entry` - The raw text of one BibTeX entry
///
/// # Returns
///
/// Pandoc's stdout as a sequence of lines.
///
/// # Errors
///
/// Returns [`RenderError::Failed`] with the exit status and stderr text when
/// pandoc exits non-zero. The caller decides whether that skips the entry or
/// aborts the run.
pub fn render_entry(pandoc: &Path, entry: &str) -> Result<Vec<String>, RenderError> {
    // NamedTempFile is deleted on drop, so the scratch file is released on
    // every exit path of this function.
    let mut scratch = tempfile::Builder::new().suffix(".bib").tempfile()?;
    scratch.write_all(entry.as_bytes())?;
    scratch.flush()?;

    let output = Command::new(pandoc)
        .arg(scratch.path())
        .arg("--standalone")
        .arg("--from=bibtex")
        .arg("--to=markdown")
        .output()?;

    if !output.status.success() {
        return Err(RenderError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(str::to_string).collect())
}
