//! Output formatting utilities

use anyhow::Result;
use tabdiff_core::{render_summary, DiffReport};

/// Pretty printer for tabdiff output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print a full diff report in tree form.
    pub fn print_diff_report(report: &DiffReport, baseline: &str, candidate: &str) {
        println!("🔍 Diff Results: {baseline} → {candidate}");

        let schema_changed =
            !report.baseline_only_columns.is_empty() || !report.candidate_only_columns.is_empty();
        if schema_changed {
            println!("├─ ❌ Schema: CHANGED");
            Self::print_schema_changes(report, "│  ");
        } else {
            println!("├─ ✅ Schema: unchanged ({} common columns)", report.common_columns.len());
        }

        if report.has_changes() {
            println!("├─ ❌ Rows: {} changed", report.total_row_changes());
            Self::print_row_changes(report, "│  ");
        } else {
            println!("├─ ✅ Rows: unchanged");
        }

        println!(
            "└─ Rows compared: {} baseline, {} candidate",
            report.baseline_row_count, report.candidate_row_count
        );
    }

    /// Print the plain-text summary (counts plus most-changed columns).
    pub fn print_summary(report: &DiffReport) {
        println!("{}", render_summary(report));
    }

    fn print_schema_changes(report: &DiffReport, prefix: &str) {
        if !report.baseline_only_columns.is_empty() {
            println!(
                "{}├─ Columns only in baseline: [{}]",
                prefix,
                report.baseline_only_columns.join(", ")
            );
        }
        if !report.candidate_only_columns.is_empty() {
            println!(
                "{}├─ Columns only in candidate: [{}]",
                prefix,
                report.candidate_only_columns.join(", ")
            );
        }
        println!(
            "{}└─ Common columns: {}",
            prefix,
            report.common_columns.len()
        );
    }

    fn print_row_changes(report: &DiffReport, prefix: &str) {
        println!("{}├─ Added: {}", prefix, report.rows_added);
        println!("{}├─ Removed: {}", prefix, report.rows_removed);
        println!("{}├─ Updated: {}", prefix, report.rows_updated);
        println!(
            "{}├─ Updated (excluded columns only): {}",
            prefix, report.rows_updated_excluded_only
        );

        if !report.column_change_counts.is_empty() {
            println!("{prefix}├─ Changed columns:");
            let mut columns: Vec<(&String, &u64)> = report.column_change_counts.iter().collect();
            columns.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (i, (name, count)) in columns.iter().enumerate() {
                let glyph = if i == columns.len() - 1 {
                    "└─"
                } else {
                    "├─"
                };
                println!("{prefix}│  {glyph} {name}: {count}");
            }
        }

        for example in &report.added_examples {
            println!("{}├─ + {} {}", prefix, example.key, preview_line(&example.preview));
        }
        for example in &report.removed_examples {
            println!("{}├─ - {} {}", prefix, example.key, preview_line(&example.preview));
        }
        for example in &report.modified_examples {
            println!("{}├─ ~ {}", prefix, example.key);
            for (i, change) in example.changes.iter().enumerate() {
                let glyph = if i == example.changes.len() - 1 {
                    "└─"
                } else {
                    "├─"
                };
                println!(
                    "{prefix}│  {glyph} {}: '{}' → '{}'",
                    change.column, change.before, change.after
                );
            }
        }
    }
}

fn preview_line(preview: &indexmap::IndexMap<String, String>) -> String {
    let cells: Vec<String> = preview
        .iter()
        .map(|(column, value)| format!("{column}={value}"))
        .collect();
    format!("({})", cells.join(", "))
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn print_diff_report(report: &DiffReport) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(report)?);
        Ok(())
    }
}
