//! QWI status flag resolution
//!
//! Every indicator column in a QWI response is paired with an `s`-prefixed
//! status flag column. A flag of -1 (suppressed for confidentiality) or -2
//! (not estimable) means the indicator cell must be treated as missing.
//! The API serves cells both as JSON numbers and as numeric strings.

use serde_json::Value;

/// Status flag values that mark a cell as non-disclosable.
const SUPPRESSED_FLAGS: [i64; 2] = [-1, -2];

/// Resolve an indicator cell against its paired status flag.
///
/// Returns `None` for suppressed cells and for cells that do not parse as a
/// non-negative integer. Total over its input domain: never errors, degrades
/// to missing.
pub fn resolve(indicator: &Value, status: &Value) -> Option<u64> {
    if let Some(flag) = cell_as_i64(status) {
        if SUPPRESSED_FLAGS.contains(&flag) {
            return None;
        }
    }
    cell_as_i64(indicator).and_then(|n| u64::try_from(n).ok())
}

/// Read a cell as an integer, accepting both JSON numbers and numeric
/// strings (the timeseries endpoint is inconsistent between the two).
fn cell_as_i64(cell: &Value) -> Option<i64> {
    match cell {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
