//! Diff entry points: orchestration of the index → classify → detail →
//! assemble pipeline
//!
//! The whole pipeline is synchronous, single-threaded, and all-or-nothing:
//! configuration errors surface before any comparison work, and no partial
//! report is ever returned. Each call is self-contained, so independent
//! comparisons can run on separate threads without interference.

use crate::classify;
use crate::config::DiffConfig;
use crate::dataset::{self, Dataset};
use crate::detail;
use crate::error::Result;
use crate::index;
use crate::key;
use crate::report::{self, DiffReport};

/// Compare a baseline dataset against a candidate and produce a report.
///
/// The primary key comes from the configuration or, when unset, from
/// auto-detection on the baseline; it is then validated against both
/// datasets before any indexing work.
pub fn compute_diff(
    baseline: &Dataset,
    candidate: &Dataset,
    config: &DiffConfig,
) -> Result<DiffReport> {
    let key_columns = match &config.primary_key {
        Some(columns) => columns.clone(),
        None => key::detect_primary_key(baseline)?,
    };
    log::debug!(
        "comparing '{}' against '{}' on key [{}]",
        baseline.source,
        candidate.source,
        key_columns.join(", ")
    );

    let common_columns = dataset::common_columns(baseline, candidate);

    let baseline_index = index::build_index(baseline, &key_columns, &common_columns, config)?;
    let candidate_index = index::build_index(candidate, &key_columns, &common_columns, config)?;

    let classification = classify::classify(&baseline_index, &candidate_index);
    log::debug!(
        "classified keys: {} added, {} removed, {} updated, {} excluded-only, {} unchanged",
        classification.added.len(),
        classification.removed.len(),
        classification.meaningful.len(),
        classification.excluded_only.len(),
        classification.unchanged
    );

    // Indexes are no longer needed past this point; the detail pass
    // re-reads source rows for the changed keys only.
    let details = detail::collect_details(
        baseline,
        candidate,
        &key_columns,
        &common_columns,
        &classification.meaningful,
        config,
    );
    let added_examples = detail::collect_row_examples(
        candidate,
        &classification.added,
        &key_columns,
        config.max_examples,
    );
    let removed_examples = detail::collect_row_examples(
        baseline,
        &classification.removed,
        &key_columns,
        config.max_examples,
    );

    Ok(report::assemble(
        baseline,
        candidate,
        common_columns,
        &classification,
        details,
        added_examples,
        removed_examples,
    ))
}

/// Convenience equality check for two datasets.
///
/// Short-circuits on row-count or header-count mismatch before paying
/// for a full diff; otherwise the datasets are identical when all four
/// change counts are zero.
pub fn datasets_identical(a: &Dataset, b: &Dataset, config: &DiffConfig) -> Result<bool> {
    if a.rows.len() != b.rows.len() || a.headers.len() != b.headers.len() {
        return Ok(false);
    }
    let report = compute_diff(a, b, config)?;
    Ok(!report.has_changes())
}
