//! fibseq - Fibonacci sequence generator
//!
//! The [`sequence`] module holds the generator; [`cli`] and [`commands`] wrap
//! it in a small command-line front end.

pub mod cli;
pub mod commands;
pub mod common;
pub mod sequence;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use sequence::{generate, nth_term, parse_count, Terms};
