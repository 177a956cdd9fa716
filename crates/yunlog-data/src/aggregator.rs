//! Datapoint aggregation.
//!
//! Folds the extraction streams of a list of log files into one
//! [`DataDict`], series by series.

use std::path::PathBuf;

use tracing::debug;
use yunlog_core::error::Result;
use yunlog_core::models::DataDict;

use crate::extractor;

/// Aggregate the datapoints of `paths`, in path order, into a
/// per-series [`DataDict`].
///
/// Each datapoint `name ts value..` appends `ts` to the series' `time`
/// field and each value to its positional `line_i` field. Tokens are
/// stored verbatim: nothing is parsed into numbers, deduplicated, or
/// padded. Any file-level error aborts the whole call with no partial
/// result.
pub fn datadict(paths: &[PathBuf]) -> Result<DataDict> {
    let mut points = DataDict::new();
    let mut total = 0u64;

    for path in paths {
        for dp in extractor::datapoints(path)? {
            let dp = dp?;
            let mut items = dp.split(' ');
            // Validation guarantees a name, a timestamp, and at least
            // one value.
            let Some(name) = items.next() else { continue };
            let Some(ts) = items.next() else { continue };

            let series = points.series_mut(name);
            series.push_time(ts);
            for (i, value) in items.enumerate() {
                series.push_value(i, value);
            }
            total += 1;
        }
    }

    debug!(
        "Aggregated {} datapoints from {} files into {} series",
        total,
        paths.len(),
        points.len()
    );

    Ok(points)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
