//! Row Indexer: phase one of the diff
//!
//! Builds, for one dataset, a mapping from match key to a lightweight
//! entry (line number plus two digests). Full rows are never retained
//! here; the Detail Collector re-reads them later for changed keys only.

use crate::config::DiffConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::{hash, key};
use indexmap::IndexMap;

/// Per-row index entry. O(1) size regardless of row width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIndexEntry {
    /// 1-based position in the source row sequence
    pub line: u64,
    /// Digest over all columns common to both datasets
    pub full_hash: String,
    /// Digest over common columns minus excluded ones
    pub comparison_hash: String,
    /// Human-readable key for reporting
    pub display_key: String,
}

/// Match key to entry, preserving dataset row order.
pub type RowIndex = IndexMap<String, RowIndexEntry>;

/// A common column is excluded when its lowercased name contains any of
/// the configured patterns. Excluded columns still feed the full hash,
/// so their changes are detected, just not counted as meaningful.
pub fn is_excluded(column: &str, patterns: &[String]) -> bool {
    let lowered = column.to_lowercase();
    patterns
        .iter()
        .any(|pattern| lowered.contains(&pattern.to_lowercase()))
}

/// Columns from `common_columns` that survive the excluded-pattern
/// filter, i.e. the comparison-hash column set.
pub fn comparison_columns(common_columns: &[String], config: &DiffConfig) -> Vec<String> {
    common_columns
        .iter()
        .filter(|column| !is_excluded(column, &config.excluded_patterns))
        .cloned()
        .collect()
}

/// Build the row index for one dataset.
///
/// `common_columns` is the pre-computed, sorted set of columns shared by
/// the two datasets being compared. Key columns are validated here, once,
/// before any row work.
///
/// Duplicate match keys within the dataset collapse with last occurrence
/// winning; this is policy, not an error, but it is surfaced in the log.
pub fn build_index(
    dataset: &Dataset,
    key_columns: &[String],
    common_columns: &[String],
    config: &DiffConfig,
) -> Result<RowIndex> {
    key::validate_key_columns(dataset, key_columns)?;

    let cmp_columns = comparison_columns(common_columns, config);

    let mut index = RowIndex::with_capacity(dataset.rows.len());
    for (position, row) in dataset.rows.iter().enumerate() {
        let entry = RowIndexEntry {
            line: position as u64 + 1,
            full_hash: hash::hash_columns(row, common_columns, config),
            comparison_hash: hash::hash_columns(row, &cmp_columns, config),
            display_key: key::display_key(row, key_columns),
        };
        index.insert(key::match_key(row, key_columns), entry);
    }

    let collapsed = dataset.rows.len() - index.len();
    if collapsed > 0 {
        log::warn!(
            "{}: {collapsed} duplicate primary key(s) collapsed, last occurrence wins",
            dataset.source
        );
    }

    Ok(index)
}
