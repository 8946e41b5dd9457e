//! Runtime configuration.
//!
//! Defaults reproduce the stock behavior; an optional TOML file overrides
//! them, either an explicit `--config` path or `bib-listing.toml` in the
//! working directory.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::extract::FrameTrim;
use crate::output::{LinkSource, ListingOptions};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "bib-listing.toml";

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Full pipeline configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Author whose position is ranked in each entry.
    pub author: String,
    /// Framing convention of the formatter's output.
    pub frame: FrameTrim,
    /// Ordered link precedence; later sources override earlier ones for a
    /// last-wins renderer.
    pub links: Vec<LinkSource>,
    /// Listing display configuration.
    pub listing: ListingOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: "Stephens".to_string(),
            frame: FrameTrim::default(),
            links: vec![LinkSource::Doi, LinkSource::Url],
            listing: ListingOptions::default(),
        }
    }
}

impl Config {
    /// Parses a TOML config file. Absent fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the configuration: the explicit path when given, else
    /// `bib-listing.toml` in the working directory when present, else
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
