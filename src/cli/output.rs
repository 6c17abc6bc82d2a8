//! Rendering of generated sequences for the terminal

use num_bigint::BigUint;
use serde::Serialize;

use crate::common::config::OutputFormat;
use crate::common::Result;

/// JSON shape for `--format json`
///
/// Terms are decimal strings so arbitrarily large values survive any JSON reader.
#[derive(Debug, Serialize)]
struct SequenceReport {
    count: i64,
    terms: Vec<String>,
}

/// Render a generated sequence, including the trailing newline
pub fn render_sequence(count: i64, terms: &[BigUint], format: OutputFormat) -> Result<String> {
    let out: String = match format {
        OutputFormat::Text => {
            let joined = terms
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("The first {count} Fibonacci numbers are: [{joined}]\n")
        }
        OutputFormat::List => terms.iter().map(|t| format!("{t}\n")).collect(),
        OutputFormat::Json => {
            let report = SequenceReport {
                count,
                terms: terms.iter().map(ToString::to_string).collect(),
            };
            format!("{}\n", serde_json::to_string(&report)?)
        }
    };
    Ok(out)
}
