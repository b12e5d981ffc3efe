//! Command implementations for tabdiff CLI

use crate::cli::Commands;
use crate::loader;
use crate::output::{JsonFormatter, PrettyPrinter};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tabdiff_core::config::{get_config, load_config_file};
use tabdiff_core::{compute_diff, datasets_identical, DiffConfig};

/// Execute a command
pub fn execute_command(command: Commands, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Diff {
            baseline,
            candidate,
            key,
            max_examples,
            exclude,
            ignore_case,
            no_trim,
            json,
        } => diff_command(
            config_path,
            &baseline,
            &candidate,
            key,
            max_examples,
            exclude,
            ignore_case,
            no_trim,
            json,
        ),
        Commands::Identical {
            baseline,
            candidate,
            key,
            ignore_case,
            no_trim,
        } => identical_command(config_path, &baseline, &candidate, key, ignore_case, no_trim),
    }
}

/// Resolve the effective configuration: config file (explicit path or
/// discovered) first, then CLI flag overrides on top.
fn resolve_config(
    config_path: Option<&Path>,
    key: Vec<String>,
    max_examples: Option<usize>,
    exclude: Vec<String>,
    ignore_case: bool,
    no_trim: bool,
) -> Result<DiffConfig> {
    let base = match config_path {
        Some(path) => load_config_file(path)?,
        None => get_config()?,
    };
    Ok(DiffConfig {
        primary_key: if key.is_empty() {
            base.primary_key
        } else {
            Some(key)
        },
        max_examples: max_examples.unwrap_or(base.max_examples),
        excluded_patterns: if exclude.is_empty() {
            base.excluded_patterns
        } else {
            exclude
        },
        case_sensitive: if ignore_case { false } else { base.case_sensitive },
        trim_whitespace: if no_trim { false } else { base.trim_whitespace },
    })
}

#[allow(clippy::too_many_arguments)]
fn diff_command(
    config_path: Option<&Path>,
    baseline_path: &PathBuf,
    candidate_path: &PathBuf,
    key: Vec<String>,
    max_examples: Option<usize>,
    exclude: Vec<String>,
    ignore_case: bool,
    no_trim: bool,
    json: bool,
) -> Result<()> {
    let config = resolve_config(config_path, key, max_examples, exclude, ignore_case, no_trim)?;

    let baseline = loader::load_csv(baseline_path)?;
    let candidate = loader::load_csv(candidate_path)?;

    let report = compute_diff(&baseline, &candidate, &config)?;

    if json {
        JsonFormatter::print_diff_report(&report)?;
    } else {
        PrettyPrinter::print_diff_report(&report, &baseline.source, &candidate.source);
        println!();
        PrettyPrinter::print_summary(&report);
    }

    Ok(())
}

fn identical_command(
    config_path: Option<&Path>,
    baseline_path: &PathBuf,
    candidate_path: &PathBuf,
    key: Vec<String>,
    ignore_case: bool,
    no_trim: bool,
) -> Result<()> {
    let config = resolve_config(config_path, key, None, Vec::new(), ignore_case, no_trim)?;

    let baseline = loader::load_csv(baseline_path)?;
    let candidate = loader::load_csv(candidate_path)?;

    if datasets_identical(&baseline, &candidate, &config)? {
        println!("identical");
        Ok(())
    } else {
        println!("different");
        std::process::exit(1);
    }
}
