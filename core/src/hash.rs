//! Row hashing and value normalization
//!
//! The index never retains row values, only fixed-width digests, so the
//! per-row index footprint is O(1) regardless of row width. The digest is
//! a fast non-cryptographic string hash; a nonzero collision probability
//! is accepted in exchange for that memory bound.

use crate::config::DiffConfig;
use crate::dataset::{Dataset, Row};

/// djb2-variant digest over 64 bits, as a fixed-width hex string.
///
/// Non-cryptographic by design: the index stores only digests, trading a
/// theoretical collision probability for O(1)-size index entries. The
/// state is kept at 64 bits (rather than djb2's usual 32) to push the
/// collision probability down for large datasets.
pub fn digest(input: &str) -> String {
    let mut h: u64 = 5381;
    for byte in input.bytes() {
        h = h.wrapping_mul(33) ^ u64::from(byte);
    }
    format!("{h:016x}")
}

/// Normalize a raw cell value per the comparison-mode flags.
///
/// The same normalization backs both hashing and the Detail Collector's
/// column-by-column comparison, so the two always agree.
pub fn normalize_value(raw: &str, config: &DiffConfig) -> String {
    let trimmed = if config.trim_whitespace {
        raw.trim()
    } else {
        raw
    };
    if config.case_sensitive {
        trimmed.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

/// Hash a row over the given columns.
///
/// `columns` must already be sorted alphabetically so the digest is
/// independent of header order. Values are normalized, joined with `|`,
/// and digested.
pub fn hash_columns(row: &Row, columns: &[String], config: &DiffConfig) -> String {
    debug_assert!(columns.windows(2).all(|w| w[0] <= w[1]));
    let joined = columns
        .iter()
        .map(|column| normalize_value(Dataset::value(row, column), config))
        .collect::<Vec<String>>()
        .join("|");
    digest(&joined)
}
