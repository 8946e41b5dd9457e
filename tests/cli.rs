//! CLI integration tests.
//!
//! Tests the command-line interface by running the binary as a subprocess.
//! Pandoc-dependent paths point the binary at the stub formatter via the
//! `BIB_LISTING_PANDOC` environment variable.

mod common;

use std::process::Command;

/// Path to the compiled binary
fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_bib-listing")
}

// ============================================
// Tests for CLI argument parsing
// ============================================

#[test]
fn test_cli_help() {
    // Given: the CLI binary
    let output = Command::new(binary_path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    // Then: help is displayed with expected content
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("bib-listing") || stdout.contains("publication listing"),
        "Help should mention the tool name or purpose: {}",
        stdout
    );
    assert!(
        stdout.contains("--author"),
        "Help should mention the --author option: {}",
        stdout
    );
    assert!(output.status.success(), "Help should exit with success");
}

// ============================================
// Tests for the error paths
// ============================================

#[cfg(unix)]
#[test]
fn test_cli_formatter_unavailable() {
    // Given: an empty PATH and no override, so no pandoc anywhere
    let empty = tempfile::tempdir().unwrap();

    // When: we run the tool
    let output = Command::new(binary_path())
        .env_remove("BIB_LISTING_PANDOC")
        .env("PATH", empty.path())
        .output()
        .expect("Failed to execute command");

    // Then: the run aborts before any processing, with the install hint
    assert_eq!(output.status.code(), Some(12));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("pandoc.org"),
        "Should point at the pandoc install page: {}",
        stderr
    );
}

#[cfg(unix)]
#[test]
fn test_cli_missing_input_file() {
    // Given: a working formatter but no input file
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_stub_formatter(dir.path());

    // When: we run the tool in a directory with no publications.bib
    let output = Command::new(binary_path())
        .env("BIB_LISTING_PANDOC", &stub)
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command");

    // Then: the distinct input-file error path fires
    assert_eq!(output.status.code(), Some(10));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("publications.bib"),
        "Should name the missing input: {}",
        stderr
    );
}

#[cfg(unix)]
#[test]
fn test_cli_invalid_config_file() {
    // Given: a config file with a misspelled field
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_stub_formatter(dir.path());
    let config_path = dir.path().join("bad.toml");
    std::fs::write(&config_path, "athor = \"typo\"\n").unwrap();

    // When: we run the tool with that config
    let output = Command::new(binary_path())
        .env("BIB_LISTING_PANDOC", &stub)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to execute command");

    // Then: the config error path fires
    assert_eq!(output.status.code(), Some(11));
}

// ============================================
// Tests for the full run
// ============================================

#[cfg(unix)]
#[test]
fn test_cli_end_to_end() {
    // Given: a three-entry bibliography (one entry unrenderable) in a fresh
    // working directory, and the stub formatter
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_stub_formatter(dir.path());
    std::fs::write(
        dir.path().join("publications.bib"),
        "@article{lead2021,\n  title = {Another Paper},\n}\n\
         @article{smith2020,\n  title = {A Paper},\n}\n\
         @broken{\n",
    )
    .unwrap();

    // When: we run the tool with no arguments
    let output = Command::new(binary_path())
        .env("BIB_LISTING_PANDOC", &stub)
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command");

    // Then: the run succeeds and the summary names both outputs and the
    // skipped entry
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("processed 2 of 3 entries"),
        "Summary should surface the skipped entry: {}",
        stdout
    );
    assert!(stdout.contains("publications.yml"));
    assert!(stdout.contains("publications.qmd"));

    // And: the data file holds the two surviving records
    let yml = std::fs::read_to_string(dir.path().join("publications.yml")).unwrap();
    assert!(yml.contains("  position: '1/2'"));
    assert!(yml.contains("  position: '2/2'"));
    assert!(yml.contains("  type: journal"));
    assert!(yml.ends_with('\n'));

    // And: the page document references the data file with the title split
    let qmd = std::fs::read_to_string(dir.path().join("publications.qmd")).unwrap();
    assert!(qmd.contains("title: 'Publications (1 + 2)'"));
    assert!(qmd.contains("    - publications.yml"));
}

#[cfg(unix)]
#[test]
fn test_cli_author_flag_overrides_default() {
    // Given: a single-entry bibliography and a target author who is absent
    let dir = tempfile::tempdir().unwrap();
    let stub = common::write_stub_formatter(dir.path());
    let bib_path = dir.path().join("refs.bib");
    std::fs::write(&bib_path, "@article{smith2020,\n  title = {A Paper},\n}\n").unwrap();

    // When: we run the tool with --author
    let output = Command::new(binary_path())
        .env("BIB_LISTING_PANDOC", &stub)
        .arg(&bib_path)
        .arg("--author")
        .arg("Nobody")
        .output()
        .expect("Failed to execute command");

    // Then: the rank records the absence
    assert!(output.status.success());
    let yml = std::fs::read_to_string(dir.path().join("refs.yml")).unwrap();
    assert!(yml.contains("  position: 'N/A/2'"));
}
