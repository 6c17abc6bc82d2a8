//! CLI command handling
//!
//! Dispatches CLI commands and prints their output.

mod output;

pub use output::render_sequence;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{paths, Error, Result};
use crate::sequence::{self, nth_term, parse_count};

/// Dispatch a CLI command
pub fn dispatch(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Generate { count, format } => {
            let count = match count {
                Some(input) => parse_count(&input)?,
                None => config.defaults.count,
            };
            let format = format.unwrap_or(config.defaults.format);

            tracing::debug!(count, ?format, "generating sequence");
            let terms = sequence::generate(count);
            print!("{}", render_sequence(count, &terms, format)?);

            Ok(())
        }

        Commands::Term { index } => {
            tracing::debug!(index, "computing single term");
            println!("{}", nth_term(index));
            Ok(())
        }

        Commands::Config => {
            let path = paths::config_path().ok_or_else(|| {
                Error::Config("could not determine the configuration directory".to_string())
            })?;

            let status = if path.exists() { "" } else { " (not found, using defaults)" };
            println!("Config file: {}{}", path.display(), status);
            println!();
            print!("{}", config.to_toml_string()?);

            Ok(())
        }
    }
}
