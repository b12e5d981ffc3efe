//! Command-line interface for tabdiff

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tabdiff")]
#[command(about = "A primary-key based tabular data diff tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use an explicit config file instead of tabdiff.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two CSV files and report the differences
    Diff {
        /// Baseline CSV file
        baseline: PathBuf,

        /// Candidate CSV file
        candidate: PathBuf,

        /// Primary key column (repeat for composite keys; auto-detected
        /// when omitted)
        #[arg(long = "key")]
        key: Vec<String>,

        /// Maximum stored examples per change category
        #[arg(long)]
        max_examples: Option<usize>,

        /// Column-name substring marking a column as excluded (repeatable;
        /// replaces the configured pattern list)
        #[arg(long = "exclude")]
        exclude: Vec<String>,

        /// Compare values case-insensitively
        #[arg(long)]
        ignore_case: bool,

        /// Keep surrounding whitespace significant
        #[arg(long)]
        no_trim: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether two CSV files hold identical data
    Identical {
        /// Baseline CSV file
        baseline: PathBuf,

        /// Candidate CSV file
        candidate: PathBuf,

        /// Primary key column (repeat for composite keys)
        #[arg(long = "key")]
        key: Vec<String>,

        /// Compare values case-insensitively
        #[arg(long)]
        ignore_case: bool,

        /// Keep surrounding whitespace significant
        #[arg(long)]
        no_trim: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
