//! CLI command definitions
//!
//! Defines the clap commands for the fibseq CLI.

use clap::Subcommand;

use crate::common::config::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the first COUNT Fibonacci numbers
    #[command(alias = "gen")]
    Generate {
        /// Number of terms (default from config, usually 10)
        #[arg(allow_hyphen_values = true)]
        count: Option<String>,

        /// Output format (default from config, usually text)
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print a single Fibonacci number, F(INDEX) with F(0) = 0
    Term {
        /// Zero-based index into the sequence
        index: u64,
    },

    /// Show the configuration file path and effective settings
    Config,
}
