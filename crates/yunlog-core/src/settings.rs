use clap::Parser;
use regex::Regex;
use std::path::PathBuf;

use crate::error::{Result, YunlogError};
use crate::models::SortKey;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Extract per-series time-series data from Yún SD-card log files.
///
/// The defaults reproduce the on-device run: the SD card mounted at
/// `/mnt/sda1`, the last 5 live or closed files (`^[CL]`), ordered by
/// their timestamp suffix.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "yunlog",
    about = "Extract per-series time-series data from embedded logger files",
    version
)]
pub struct Settings {
    /// Directory containing the logger's output files
    #[arg(long, default_value = "/mnt/sda1")]
    pub data_path: PathBuf,

    /// Filename filter, a regular expression anchored at the start of the name
    #[arg(long, default_value = "^[CL]")]
    pub filter: String,

    /// Number of most-recent files to process
    #[arg(long, short = 'n', default_value = "5")]
    pub count: usize,

    /// Sort key used to pick the most-recent files
    #[arg(long, value_enum, default_value = "timestamp")]
    pub sort: SortKey,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

impl Settings {
    /// Compile the filename filter.
    pub fn filter_regex(&self) -> Result<Regex> {
        Regex::new(&self.filter).map_err(|source| YunlogError::InvalidFilter {
            pattern: self.filter.clone(),
            source,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
