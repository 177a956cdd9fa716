use clap::ValueEnum;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

// ── SortKey ───────────────────────────────────────────────────────────────────

/// How candidate filenames are ordered when picking the most recent files.
///
/// Log filenames look like `C1421953.747`: a status character (`C`, `L`
/// or `S`) followed by the logger's 10-digit timestamp. Sorting on the
/// full name therefore groups by status character first, which is not
/// the same as timestamp order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Plain lexicographic order on the full filename, status character
    /// included.
    Name,
    /// Order by everything after the status character, i.e. the
    /// timestamp suffix.
    Timestamp,
}

impl SortKey {
    /// The portion of `name` this key compares.
    pub fn key<'a>(&self, name: &'a str) -> &'a str {
        match self {
            SortKey::Name => name,
            SortKey::Timestamp => name.get(1..).unwrap_or(""),
        }
    }
}

// ── SeriesRecord ──────────────────────────────────────────────────────────────

/// One measurement series accumulated from extracted datapoints.
///
/// `time` holds the timestamp tokens in encounter order; `line_i` holds
/// the i-th value of each datapoint, same order. Value columns are
/// created on first use, so a series whose datapoints carry varying
/// value counts ends up with ragged columns: a `line_i` that only some
/// datapoints populated is shorter than `time`. That mismatch is kept
/// as-is, never padded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesRecord {
    time: Vec<String>,
    lines: Vec<Vec<String>>,
}

impl SeriesRecord {
    /// Append a timestamp token to the `time` field.
    pub fn push_time(&mut self, ts: impl Into<String>) {
        self.time.push(ts.into());
    }

    /// Append a value token to the `line_i` column, creating the column
    /// on first use.
    pub fn push_value(&mut self, i: usize, value: impl Into<String>) {
        while self.lines.len() <= i {
            self.lines.push(Vec::new());
        }
        self.lines[i].push(value.into());
    }

    /// The timestamp tokens, in encounter order.
    pub fn time(&self) -> &[String] {
        &self.time
    }

    /// The `line_i` column, if any datapoint has populated it.
    pub fn line(&self, i: usize) -> Option<&[String]> {
        self.lines.get(i).map(Vec::as_slice)
    }

    /// Number of value columns this series has seen so far.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl Serialize for SeriesRecord {
    /// Serializes as `{"time": [..], "line_0": [..], ..}` with `time`
    /// first and the value columns in index order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.lines.len()))?;
        map.serialize_entry("time", &self.time)?;
        for (i, line) in self.lines.iter().enumerate() {
            map.serialize_entry(&format!("line_{i}"), line)?;
        }
        map.end()
    }
}

// ── DataDict ──────────────────────────────────────────────────────────────────

/// The aggregate output: series name mapped to its [`SeriesRecord`].
///
/// Iteration and serialization follow first-encounter order of series
/// names across the processed file set. Built fresh per aggregation
/// call and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct DataDict {
    series: IndexMap<String, SeriesRecord>,
}

impl DataDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record for `name`, created empty on first use.
    pub fn series_mut(&mut self, name: &str) -> &mut SeriesRecord {
        self.series.entry(name.to_string()).or_default()
    }

    /// The record for `name`, if any datapoint has been recorded for it.
    pub fn get(&self, name: &str) -> Option<&SeriesRecord> {
        self.series.get(name)
    }

    /// Iterate over `(name, record)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SeriesRecord)> {
        self.series.iter()
    }

    /// Number of distinct series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
