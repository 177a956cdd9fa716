//! Datapoint extraction.
//!
//! Scans a log file line by line for bracketed datapoints and yields
//! the validated ones lazily, skipping (and logging) malformed records.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::error;
use yunlog_core::error::{Result, YunlogError};

// A datapoint is everything in brackets, without the brackets.
static DP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]+)\)").expect("datapoint pattern is valid"));

// ── Public API ────────────────────────────────────────────────────────────────

/// Returns `true` when `datapoint` has 3 or more single-space-separated
/// tokens: a name, a timestamp, and one or more values.
pub fn validate_datapoint(datapoint: &str) -> bool {
    datapoint.split(' ').count() >= 3
}

/// Open `path` and return a lazy iterator over its validated datapoints.
///
/// Malformed datapoints are logged at error level and skipped; errors
/// while reading are yielded as `Err` items. A file that cannot be
/// opened fails here, with no partial results.
pub fn datapoints(path: &Path) -> Result<Datapoints> {
    let file = File::open(path).map_err(|source| YunlogError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Datapoints {
        path: path.to_path_buf(),
        lines: BufReader::new(file).lines(),
        pending: VecDeque::new(),
    })
}

// ── Datapoints ────────────────────────────────────────────────────────────────

/// Lazy stream of validated datapoint strings from a single log file.
///
/// The file handle lives inside the iterator and is closed when it is
/// dropped, on every exit path. The stream is finite and cannot be
/// restarted; call [`datapoints`] again for a second pass.
#[derive(Debug)]
pub struct Datapoints {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    /// Validated matches of the current line, ahead of the cursor.
    pending: VecDeque<String>,
}

impl Iterator for Datapoints {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(dp) = self.pending.pop_front() {
                return Some(Ok(dp));
            }
            match self.lines.next()? {
                Ok(line) => self.scan_line(&line),
                Err(source) => {
                    return Some(Err(YunlogError::FileRead {
                        path: self.path.clone(),
                        source,
                    }))
                }
            }
        }
    }
}

impl Datapoints {
    /// Queue the validated matches of one line, left to right. Matches
    /// never span lines.
    fn scan_line(&mut self, line: &str) {
        for caps in DP_REGEX.captures_iter(line) {
            let dp = &caps[1];
            if validate_datapoint(dp) {
                self.pending.push_back(dp.to_string());
            } else {
                error!("invalid datapoint: {}", dp);
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
