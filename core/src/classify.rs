//! Change Classifier: phase two of the diff
//!
//! Pure set-and-hash comparison over the two row indexes. No validation
//! happens here; both indexes are assumed to have been built from the
//! same common-column and excluded-pattern configuration.

use crate::index::RowIndex;

/// Partition of keys across the two indexes.
///
/// Every baseline key lands in exactly one of {removed, unchanged,
/// meaningful, excluded-only}; every candidate key in exactly one of
/// {added, one of the matched categories}. Key vectors preserve index
/// iteration order, which is dataset row order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Keys present only in the candidate index
    pub added: Vec<String>,
    /// Keys present only in the baseline index
    pub removed: Vec<String>,
    /// Matched keys whose comparison hashes differ
    pub meaningful: Vec<String>,
    /// Matched keys where only excluded columns differ
    pub excluded_only: Vec<String>,
    /// Matched keys with equal full hashes
    pub unchanged: usize,
}

/// Classify candidate keys as added or matched, matched keys by change
/// category, and baseline keys as removed.
///
/// Matched keys compare full hashes first: equal means unchanged.
/// Unequal full hashes fall through to the comparison hashes: unequal
/// means a meaningful change, equal means the difference is confined to
/// excluded columns.
pub fn classify(baseline: &RowIndex, candidate: &RowIndex) -> Classification {
    let mut result = Classification::default();

    for (key, entry) in candidate {
        match baseline.get(key) {
            None => result.added.push(key.clone()),
            Some(base_entry) => {
                if base_entry.full_hash == entry.full_hash {
                    result.unchanged += 1;
                } else if base_entry.comparison_hash != entry.comparison_hash {
                    result.meaningful.push(key.clone());
                } else {
                    result.excluded_only.push(key.clone());
                }
            }
        }
    }

    for key in baseline.keys() {
        if !candidate.contains_key(key) {
            result.removed.push(key.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::RowIndexEntry;

    fn entry(line: u64, full: &str, cmp: &str) -> RowIndexEntry {
        RowIndexEntry {
            line,
            full_hash: full.to_string(),
            comparison_hash: cmp.to_string(),
            display_key: line.to_string(),
        }
    }

    fn index(entries: &[(&str, RowIndexEntry)]) -> RowIndex {
        entries
            .iter()
            .map(|(k, e)| (k.to_string(), e.clone()))
            .collect()
    }

    #[test]
    fn partitions_every_key_exactly_once() {
        let baseline = index(&[
            ("kept", entry(1, "f1", "c1")),
            ("changed", entry(2, "f2", "c2")),
            ("excluded", entry(3, "f3", "c3")),
            ("gone", entry(4, "f4", "c4")),
        ]);
        let candidate = index(&[
            ("kept", entry(1, "f1", "c1")),
            ("changed", entry(2, "f2x", "c2x")),
            ("excluded", entry(3, "f3x", "c3")),
            ("new", entry(4, "f5", "c5")),
        ]);

        let result = classify(&baseline, &candidate);
        assert_eq!(result.added, vec!["new"]);
        assert_eq!(result.removed, vec!["gone"]);
        assert_eq!(result.meaningful, vec!["changed"]);
        assert_eq!(result.excluded_only, vec!["excluded"]);
        assert_eq!(result.unchanged, 1);

        let matched = result.meaningful.len() + result.excluded_only.len() + result.unchanged;
        assert_eq!(result.added.len() + matched, candidate.len());
        assert_eq!(result.removed.len() + matched, baseline.len());
    }

    #[test]
    fn empty_indexes_classify_to_nothing() {
        let result = classify(&RowIndex::new(), &RowIndex::new());
        assert_eq!(result, Classification::default());
    }
}
