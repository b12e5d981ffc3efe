//! Diff report aggregate and plain-text summary

use crate::classify::Classification;
use crate::dataset::{self, Dataset};
use crate::detail::{ChangeDetails, ModifiedRowExample, RowExample};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of changed columns listed in the plain-text summary.
const SUMMARY_TOP_COLUMNS: usize = 5;

/// Final comparison report.
///
/// Fully deterministic for identical inputs and configuration: counts
/// never depend on iteration order, and example selection follows the
/// (insertion-ordered) index iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Distinct keys present only in the candidate
    pub rows_added: u64,
    /// Distinct keys present only in the baseline
    pub rows_removed: u64,
    /// Matched keys with at least one non-excluded column change
    pub rows_updated: u64,
    /// Matched keys differing only in excluded columns
    pub rows_updated_excluded_only: u64,

    /// Total rows in the baseline dataset, before key dedup
    pub baseline_row_count: u64,
    /// Total rows in the candidate dataset, before key dedup
    pub candidate_row_count: u64,

    /// Exact per-column change counts over the meaningful-change set
    pub column_change_counts: IndexMap<String, u64>,

    /// Bounded example collections
    pub added_examples: Vec<RowExample>,
    pub removed_examples: Vec<RowExample>,
    pub modified_examples: Vec<ModifiedRowExample>,

    /// Column-name sets, each sorted alphabetically
    pub common_columns: Vec<String>,
    pub baseline_only_columns: Vec<String>,
    pub candidate_only_columns: Vec<String>,
}

impl DiffReport {
    /// True when any of the four change counts is nonzero.
    pub fn has_changes(&self) -> bool {
        self.total_row_changes() > 0
    }

    pub fn total_row_changes(&self) -> u64 {
        self.rows_added + self.rows_removed + self.rows_updated + self.rows_updated_excluded_only
    }
}

/// Merge classifier counts, collector details, and dataset metadata into
/// the final report. Schema-difference sets come from the header lists,
/// not row content.
pub(crate) fn assemble(
    baseline: &Dataset,
    candidate: &Dataset,
    common_columns: Vec<String>,
    classification: &Classification,
    details: ChangeDetails,
    added_examples: Vec<RowExample>,
    removed_examples: Vec<RowExample>,
) -> DiffReport {
    DiffReport {
        rows_added: classification.added.len() as u64,
        rows_removed: classification.removed.len() as u64,
        rows_updated: classification.meaningful.len() as u64,
        rows_updated_excluded_only: classification.excluded_only.len() as u64,
        baseline_row_count: baseline.row_count(),
        candidate_row_count: candidate.row_count(),
        column_change_counts: details.column_change_counts,
        added_examples,
        removed_examples,
        modified_examples: details.modified_examples,
        baseline_only_columns: dataset::headers_only_in(baseline, candidate),
        candidate_only_columns: dataset::headers_only_in(candidate, baseline),
        common_columns,
    }
}

/// Render counts and the most-changed columns as plain text lines.
///
/// Presentation helper; consumers snapshot this output, so the shape is
/// stable: counts first, then up to five columns ordered by descending
/// change count (name ascending on ties).
pub fn render_summary(report: &DiffReport) -> String {
    let mut lines = vec![
        format!("Baseline rows: {}", report.baseline_row_count),
        format!("Candidate rows: {}", report.candidate_row_count),
        format!("Rows added: {}", report.rows_added),
        format!("Rows removed: {}", report.rows_removed),
        format!("Rows updated: {}", report.rows_updated),
        format!(
            "Rows updated (excluded columns only): {}",
            report.rows_updated_excluded_only
        ),
    ];

    if !report.column_change_counts.is_empty() {
        lines.push("Most changed columns:".to_string());
        let mut columns: Vec<(&String, &u64)> = report.column_change_counts.iter().collect();
        columns.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (name, count) in columns.into_iter().take(SUMMARY_TOP_COLUMNS) {
            lines.push(format!("  {name}: {count}"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_report() -> DiffReport {
        DiffReport {
            rows_added: 0,
            rows_removed: 0,
            rows_updated: 0,
            rows_updated_excluded_only: 0,
            baseline_row_count: 0,
            candidate_row_count: 0,
            column_change_counts: IndexMap::new(),
            added_examples: Vec::new(),
            removed_examples: Vec::new(),
            modified_examples: Vec::new(),
            common_columns: Vec::new(),
            baseline_only_columns: Vec::new(),
            candidate_only_columns: Vec::new(),
        }
    }

    #[test]
    fn summary_orders_columns_by_count_then_name() {
        let mut report = empty_report();
        report.rows_updated = 9;
        for (column, count) in [("b", 3), ("a", 3), ("f", 9), ("c", 1), ("d", 1), ("e", 1)] {
            report.column_change_counts.insert(column.to_string(), count);
        }

        let summary = render_summary(&report);
        let column_lines: Vec<&str> = summary
            .lines()
            .skip_while(|line| *line != "Most changed columns:")
            .skip(1)
            .collect();
        assert_eq!(
            column_lines,
            vec!["  f: 9", "  a: 3", "  b: 3", "  c: 1", "  d: 1"]
        );
    }

    #[test]
    fn summary_omits_column_section_when_nothing_changed() {
        let summary = render_summary(&empty_report());
        assert!(!summary.contains("Most changed columns"));
        assert!(summary.contains("Rows added: 0"));
    }
}
