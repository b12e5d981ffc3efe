//! # tabdiff-core
//!
//! Core library for tabdiff - a deterministic, memory-conscious diff
//! engine for tabular datasets. Compares a baseline and a candidate
//! dataset by primary key and reports row additions, removals, and two
//! classes of modification (meaningful vs. confined to policy-excluded
//! columns), plus column-level change statistics and schema differences.
//!
//! This crate provides the engine itself; file parsing and presentation
//! live in the interfaces built on top of it (CLI, etc.).

pub mod classify;
pub mod config;
pub mod dataset;
pub mod detail;
pub mod diff;
pub mod error;
pub mod hash;
pub mod index;
pub mod key;
pub mod report;

// Re-export the most commonly used types for convenience
pub use config::DiffConfig;
pub use dataset::{Dataset, Row};
pub use detail::{CellChange, ModifiedRowExample, RowExample};
pub use diff::{compute_diff, datasets_identical};
pub use error::{Result, TabdiffError};
pub use report::{render_summary, DiffReport};
