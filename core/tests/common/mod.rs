//! Common test utilities and fixtures

use tabdiff_core::{Dataset, DiffConfig, Row};

/// Build a row from column/value pairs.
pub fn row(cells: &[(&str, &str)]) -> Row {
    cells
        .iter()
        .map(|(column, value)| (column.to_string(), value.to_string()))
        .collect()
}

/// Build a dataset from header names and rows.
pub fn dataset(source: &str, headers: &[&str], rows: Vec<Row>) -> Dataset {
    Dataset::new(
        source,
        headers.iter().map(|h| h.to_string()).collect(),
        rows,
    )
}

/// Default configuration pinned to the given primary key columns.
pub fn config_with_key(columns: &[&str]) -> DiffConfig {
    DiffConfig {
        primary_key: Some(columns.iter().map(|c| c.to_string()).collect()),
        ..DiffConfig::default()
    }
}
