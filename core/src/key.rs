//! Primary key validation, encoding, and auto-detection

use crate::dataset::{Dataset, Row};
use crate::error::{Result, TabdiffError};
use std::collections::HashSet;

/// Literal substituted for an absent key component in both the match key
/// and the display key.
pub const MISSING_KEY_COMPONENT: &str = "<missing>";

/// Separator for the internal match key. Chosen so composite match keys
/// cannot collide the way `_`-joined display keys can.
const MATCH_KEY_SEPARATOR: &str = "||";

/// Separator for the human-readable display key.
const DISPLAY_KEY_SEPARATOR: &str = "_";

/// Column names tried first during auto-detection, in priority order.
const ID_LIKE_COLUMNS: &[&str] = &["id", "uuid", "guid", "key", "pk", "sku", "code"];

/// A column qualifies as a detected key when this proportion of its
/// non-empty values is unique.
const UNIQUE_RATIO_THRESHOLD: f64 = 0.95;

/// Check that every key column exists in the dataset's headers.
///
/// Runs once per dataset before indexing; the error names every missing
/// column at once so the caller can fix the key spec in one pass.
pub fn validate_key_columns(dataset: &Dataset, key_columns: &[String]) -> Result<()> {
    let headers: HashSet<&str> = dataset.headers.iter().map(String::as_str).collect();
    let missing: Vec<String> = key_columns
        .iter()
        .filter(|column| !headers.contains(column.as_str()))
        .cloned()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(TabdiffError::missing_primary_key(
            dataset.source.clone(),
            missing,
            dataset.headers.clone(),
        ))
    }
}

fn key_component<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column)
        .map(String::as_str)
        .unwrap_or(MISSING_KEY_COMPONENT)
}

/// Internal match key for a row.
///
/// Single-column keys use the raw value directly; composite keys join
/// values with `||`. Independent of the display key encoding.
pub fn match_key(row: &Row, key_columns: &[String]) -> String {
    if key_columns.len() == 1 {
        return key_component(row, &key_columns[0]).to_string();
    }
    key_columns
        .iter()
        .map(|column| key_component(row, column))
        .collect::<Vec<&str>>()
        .join(MATCH_KEY_SEPARATOR)
}

/// Human-readable key for reporting, joined with `_`.
///
/// Not guaranteed collision-free for composite keys; matching always
/// goes through [`match_key`].
pub fn display_key(row: &Row, key_columns: &[String]) -> String {
    key_columns
        .iter()
        .map(|column| key_component(row, column))
        .collect::<Vec<&str>>()
        .join(DISPLAY_KEY_SEPARATOR)
}

/// Auto-detect a primary key when none is configured.
///
/// Tries, in order: an id-like column name (case-insensitive exact
/// match), any column whose unique-value ratio among non-empty values
/// exceeds 0.95, and finally the first header. Fails only when the
/// dataset has no columns at all.
pub fn detect_primary_key(dataset: &Dataset) -> Result<Vec<String>> {
    if dataset.headers.is_empty() {
        return Err(TabdiffError::auto_detect_failed(dataset.source.clone()));
    }

    for candidate in ID_LIKE_COLUMNS {
        if let Some(header) = dataset
            .headers
            .iter()
            .find(|h| h.eq_ignore_ascii_case(candidate))
        {
            log::debug!("{}: auto-detected id-like key column '{header}'", dataset.source);
            return Ok(vec![header.clone()]);
        }
    }

    for header in &dataset.headers {
        if unique_ratio(dataset, header) > UNIQUE_RATIO_THRESHOLD {
            log::debug!(
                "{}: auto-detected high-uniqueness key column '{header}'",
                dataset.source
            );
            return Ok(vec![header.clone()]);
        }
    }

    log::debug!(
        "{}: falling back to first column '{}' as key",
        dataset.source,
        dataset.headers[0]
    );
    Ok(vec![dataset.headers[0].clone()])
}

/// Proportion of distinct non-empty values among non-empty values.
/// Returns 0.0 for a column with no non-empty values.
fn unique_ratio(dataset: &Dataset, column: &str) -> f64 {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut non_empty = 0usize;
    for row in &dataset.rows {
        let value = Dataset::value(row, column);
        if !value.is_empty() {
            non_empty += 1;
            seen.insert(value);
        }
    }
    if non_empty == 0 {
        return 0.0;
    }
    seen.len() as f64 / non_empty as f64
}
