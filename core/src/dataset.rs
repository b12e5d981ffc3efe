//! In-memory tabular dataset model

use indexmap::IndexMap;

/// A single row: column name to string value, in original column order.
///
/// Rows are allowed to be ragged. A column absent from a row reads as the
/// empty string everywhere in the engine.
pub type Row = IndexMap<String, String>;

/// An ordered tabular dataset with named columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Source identifier, typically the originating filename
    pub source: String,
    /// Column names in display order; unique, order significant for
    /// display but not for comparison
    pub headers: Vec<String>,
    /// Rows in source order
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            source: source.into(),
            headers,
            rows,
        }
    }

    pub fn row_count(&self) -> u64 {
        self.rows.len() as u64
    }

    /// Read a cell, treating a missing column as empty.
    pub fn value<'a>(row: &'a Row, column: &str) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Columns present in both datasets' headers, sorted alphabetically.
///
/// Computed once per comparison, before indexing begins; both the full
/// hash and the comparison hash are taken over subsets of this list.
pub fn common_columns(baseline: &Dataset, candidate: &Dataset) -> Vec<String> {
    let candidate_headers: std::collections::HashSet<&str> =
        candidate.headers.iter().map(String::as_str).collect();
    let mut common: Vec<String> = baseline
        .headers
        .iter()
        .filter(|h| candidate_headers.contains(h.as_str()))
        .cloned()
        .collect();
    common.sort();
    common
}

/// Headers of `dataset` that `other` does not have, sorted alphabetically.
pub fn headers_only_in(dataset: &Dataset, other: &Dataset) -> Vec<String> {
    let other_headers: std::collections::HashSet<&str> =
        other.headers.iter().map(String::as_str).collect();
    let mut only: Vec<String> = dataset
        .headers
        .iter()
        .filter(|h| !other_headers.contains(h.as_str()))
        .cloned()
        .collect();
    only.sort();
    only
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(source: &str, headers: &[&str]) -> Dataset {
        Dataset::new(
            source,
            headers.iter().map(|h| h.to_string()).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn common_columns_are_sorted_intersection() {
        let a = dataset("a.csv", &["id", "zip", "name", "email"]);
        let b = dataset("b.csv", &["email", "name", "id", "phone"]);
        assert_eq!(common_columns(&a, &b), vec!["email", "id", "name"]);
    }

    #[test]
    fn headers_only_in_is_sorted() {
        let a = dataset("a.csv", &["id", "zip", "name"]);
        let b = dataset("b.csv", &["id", "phone"]);
        assert_eq!(headers_only_in(&a, &b), vec!["name", "zip"]);
        assert_eq!(headers_only_in(&b, &a), vec!["phone"]);
    }

    #[test]
    fn missing_value_reads_as_empty() {
        let mut row = Row::new();
        row.insert("id".to_string(), "1".to_string());
        assert_eq!(Dataset::value(&row, "id"), "1");
        assert_eq!(Dataset::value(&row, "name"), "");
    }
}
