//! Detail Collector: phase three of the diff
//!
//! Re-reads source rows in a bounded second pass for changed keys only.
//! Phase one deliberately keeps no row data resident, so peak memory here
//! is bounded by the number of changed rows, not total row count.

use crate::config::DiffConfig;
use crate::dataset::{Dataset, Row};
use crate::hash::normalize_value;
use crate::index::is_excluded;
use crate::key;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A modified-row example shows at most this many column-level changes,
/// even when more columns differ.
const MAX_EXAMPLE_CELL_CHANGES: usize = 5;

/// Added/removed row previews show at most this many columns.
const MAX_PREVIEW_COLUMNS: usize = 4;

/// One column-level before/after within a modified row.
///
/// Values are the raw source strings; the decision that they differ is
/// made on normalized values, so display fidelity is exact while
/// comparison semantics stay configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub column: String,
    pub before: String,
    pub after: String,
}

/// Bounded example of a meaningfully modified row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiedRowExample {
    pub key: String,
    pub changes: Vec<CellChange>,
}

/// Bounded example of an added or removed row: the display key plus a
/// short preview of non-key, non-empty columns in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowExample {
    pub key: String,
    pub preview: IndexMap<String, String>,
}

/// Output of the detail pass over the meaningful-change set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeDetails {
    /// Exact change tally per column across the whole changed set;
    /// meaningful (non-excluded) columns only
    pub column_change_counts: IndexMap<String, u64>,
    /// Examples in changed-key iteration order, capped at max_examples
    pub modified_examples: Vec<ModifiedRowExample>,
}

/// Re-scan a dataset keeping only rows whose match key is in `wanted`,
/// restricted to `columns`. Later duplicates overwrite earlier ones,
/// mirroring the indexer's last-occurrence-wins policy.
fn collect_rows_for_keys<'a>(
    dataset: &'a Dataset,
    key_columns: &[String],
    wanted: &HashSet<&str>,
    columns: &'a [String],
) -> HashMap<String, IndexMap<&'a str, &'a str>> {
    let mut found: HashMap<String, IndexMap<&str, &str>> = HashMap::with_capacity(wanted.len());
    for row in &dataset.rows {
        let match_key = key::match_key(row, key_columns);
        if !wanted.contains(match_key.as_str()) {
            continue;
        }
        let restricted: IndexMap<&str, &str> = columns
            .iter()
            .map(|column| (column.as_str(), Dataset::value(row, column)))
            .collect();
        found.insert(match_key, restricted);
    }
    found
}

/// Compute per-column tallies and bounded modified-row examples for the
/// meaningful-change key set.
///
/// Tallies are exact over every changed key; only the example collection
/// is capped. Pure function: no I/O, inputs untouched.
pub fn collect_details(
    baseline: &Dataset,
    candidate: &Dataset,
    key_columns: &[String],
    common_columns: &[String],
    changed_keys: &[String],
    config: &DiffConfig,
) -> ChangeDetails {
    let mut details = ChangeDetails::default();
    if changed_keys.is_empty() {
        return details;
    }

    let wanted: HashSet<&str> = changed_keys.iter().map(String::as_str).collect();
    let baseline_rows = collect_rows_for_keys(baseline, key_columns, &wanted, common_columns);
    let candidate_rows = collect_rows_for_keys(candidate, key_columns, &wanted, common_columns);

    // Columns displayed in the newer file's layout
    let ordered_columns: Vec<&String> = candidate
        .headers
        .iter()
        .filter(|h| common_columns.contains(h))
        .collect();

    for changed_key in changed_keys {
        let (Some(before_row), Some(after_row)) = (
            baseline_rows.get(changed_key),
            candidate_rows.get(changed_key),
        ) else {
            continue;
        };

        let mut changes: Vec<CellChange> = Vec::new();
        for column in &ordered_columns {
            if is_excluded(column, &config.excluded_patterns) {
                continue;
            }
            let before = before_row.get(column.as_str()).copied().unwrap_or("");
            let after = after_row.get(column.as_str()).copied().unwrap_or("");
            if normalize_value(before, config) == normalize_value(after, config) {
                continue;
            }
            *details
                .column_change_counts
                .entry((*column).clone())
                .or_insert(0) += 1;
            if changes.len() < MAX_EXAMPLE_CELL_CHANGES {
                changes.push(CellChange {
                    column: (*column).clone(),
                    before: before.to_string(),
                    after: after.to_string(),
                });
            }
        }

        if !changes.is_empty() && details.modified_examples.len() < config.max_examples {
            // key columns exist in both datasets, so either row works
            // for the display key; use the candidate side
            let display_key = candidate
                .rows
                .iter()
                .rev()
                .find(|row| key::match_key(row, key_columns) == *changed_key)
                .map(|row| key::display_key(row, key_columns))
                .unwrap_or_else(|| changed_key.clone());
            details.modified_examples.push(ModifiedRowExample {
                key: display_key,
                changes,
            });
        }
    }

    details
}

/// Build bounded previews for added or removed rows.
///
/// `keys` is the classifier's added (or removed) key list; examples are
/// taken in that order up to `max_examples`. Each preview shows up to
/// four non-key columns with non-empty values, in original header order.
pub fn collect_row_examples(
    dataset: &Dataset,
    keys: &[String],
    key_columns: &[String],
    max_examples: usize,
) -> Vec<RowExample> {
    let sampled: Vec<&String> = keys.iter().take(max_examples).collect();
    if sampled.is_empty() {
        return Vec::new();
    }
    let wanted: HashSet<&str> = sampled.iter().map(|k| k.as_str()).collect();

    // Last occurrence wins, matching the index entry the key maps to.
    let mut rows: HashMap<String, &Row> = HashMap::with_capacity(sampled.len());
    for row in &dataset.rows {
        let match_key = key::match_key(row, key_columns);
        if wanted.contains(match_key.as_str()) {
            rows.insert(match_key, row);
        }
    }

    sampled
        .iter()
        .filter_map(|sampled_key| rows.get(sampled_key.as_str()))
        .map(|row| {
            let preview: IndexMap<String, String> = dataset
                .headers
                .iter()
                .filter(|header| !key_columns.contains(header))
                .filter_map(|header| {
                    let value = Dataset::value(row, header);
                    if value.is_empty() {
                        None
                    } else {
                        Some((header.clone(), value.to_string()))
                    }
                })
                .take(MAX_PREVIEW_COLUMNS)
                .collect();
            RowExample {
                key: key::display_key(row, key_columns),
                preview,
            }
        })
        .collect()
}
