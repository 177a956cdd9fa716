//! Log-file selection.
//!
//! Picks the `n` most recent files out of the logger's output directory.
//! Filenames look like `C1421953.747`: a status character (`C`losed,
//! `L`ive or `S`ynced) followed by a 10-digit timestamp, so "most
//! recent" depends on the [`SortKey`] in use.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;
use yunlog_core::error::{Result, YunlogError};
use yunlog_core::models::SortKey;

// ── Public API ────────────────────────────────────────────────────────────────

/// Return the last `n` files in `dir` whose names match `filter`,
/// sorted ascending by `sort_key`.
///
/// The filter is applied to the filename only and must match starting
/// at the first character; a match beginning anywhere else does not
/// count. When fewer than `n` names match, all matches are returned.
/// A directory that cannot be listed fails the whole call.
pub fn last_files(
    dir: &Path,
    filter: &Regex,
    n: usize,
    sort_key: SortKey,
) -> Result<Vec<PathBuf>> {
    let mut names: Vec<String> = Vec::new();
    for entry in walkdir::WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| YunlogError::DirList {
            path: dir.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if matches_at_start(filter, name) {
            names.push(name.to_string());
        }
    }

    names.sort_by(|a, b| sort_key.key(a).cmp(sort_key.key(b)));
    let tail = &names[names.len().saturating_sub(n)..];

    debug!(
        "Selected {} of {} matching files in {}",
        tail.len(),
        names.len(),
        dir.display()
    );

    Ok(tail.iter().map(|name| dir.join(name)).collect())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Match semantics of the filename filter: the pattern has to match at
/// position 0, but need not cover the whole name.
fn matches_at_start(filter: &Regex, name: &str) -> bool {
    filter.find(name).is_some_and(|m| m.start() == 0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Five live/closed files spanning three logger timestamps, plus one
    // synced file the default filter must skip.
    const FIXTURES: [&str; 6] = [
        "C1421953.747",
        "C1421953.787",
        "C1422466.123",
        "L1422366.105",
        "L1422366.510",
        "S1421953.747",
    ];

    fn fixture_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in FIXTURES {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        dir
    }

    fn live_or_closed() -> Regex {
        Regex::new("^[CL]").unwrap()
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_returns_exactly_n_files() {
        let dir = fixture_dir();
        for n in [2, 3] {
            let files =
                last_files(dir.path(), &live_or_closed(), n, SortKey::Timestamp).unwrap();
            assert_eq!(files.len(), n);
        }
    }

    #[test]
    fn test_never_returns_more_than_available() {
        let dir = fixture_dir();
        // Only 5 names match the default filter.
        let files = last_files(dir.path(), &live_or_closed(), 6, SortKey::Timestamp).unwrap();
        assert_eq!(files.len(), 5);
    }

    #[test]
    fn test_ordering_by_timestamp_suffix() {
        let dir = fixture_dir();
        let files = last_files(dir.path(), &live_or_closed(), 6, SortKey::Timestamp).unwrap();
        assert_eq!(
            names(&files),
            vec![
                "C1421953.747",
                "C1421953.787",
                "L1422366.105",
                "L1422366.510",
                "C1422466.123",
            ]
        );
    }

    #[test]
    fn test_ordering_by_full_name_diverges() {
        let dir = fixture_dir();
        let files = last_files(dir.path(), &live_or_closed(), 6, SortKey::Name).unwrap();
        // Lexicographically every C name sorts before every L name, so
        // C1422466.123 drops from last place to the middle.
        assert_eq!(
            names(&files),
            vec![
                "C1421953.747",
                "C1421953.787",
                "C1422466.123",
                "L1422366.105",
                "L1422366.510",
            ]
        );
    }

    #[test]
    fn test_truncation_keeps_the_greatest_keys() {
        let dir = fixture_dir();
        let files = last_files(dir.path(), &live_or_closed(), 2, SortKey::Timestamp).unwrap();
        assert_eq!(names(&files), vec!["L1422366.510", "C1422466.123"]);
    }

    #[test]
    fn test_zero_count_returns_nothing() {
        let dir = fixture_dir();
        let files = last_files(dir.path(), &live_or_closed(), 0, SortKey::Timestamp).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_paths_are_joined_onto_dir() {
        let dir = fixture_dir();
        let files = last_files(dir.path(), &live_or_closed(), 1, SortKey::Timestamp).unwrap();
        assert_eq!(files, vec![dir.path().join("C1422466.123")]);
    }

    #[test]
    fn test_filter_must_match_at_name_start() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("C1421953.747"), "").unwrap();
        std::fs::write(dir.path().join("XC1421953.787"), "").unwrap();

        // Unanchored pattern: still only counts when the match begins
        // at position 0.
        let filter = Regex::new("C").unwrap();
        let files = last_files(dir.path(), &filter, 10, SortKey::Name).unwrap();
        assert_eq!(names(&files), vec!["C1421953.747"]);
    }

    #[test]
    fn test_subdirectories_are_ignored() {
        let dir = fixture_dir();
        std::fs::create_dir(dir.path().join("C9999999.999")).unwrap();

        let files = last_files(dir.path(), &live_or_closed(), 10, SortKey::Timestamp).unwrap();
        assert_eq!(files.len(), 5);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let err = last_files(
            Path::new("/tmp/does-not-exist-yunlog-test"),
            &live_or_closed(),
            5,
            SortKey::Timestamp,
        )
        .unwrap_err();
        assert!(matches!(err, YunlogError::DirList { .. }));
    }
}
