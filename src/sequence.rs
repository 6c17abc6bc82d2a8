//! Fibonacci sequence generation
//!
//! Terms are computed iteratively from the running pair `(a, b)`, seeded with
//! F(0) = 0 and F(1) = 1. Nothing here recurses, so large counts cost linear
//! time and constant stack.

use num_bigint::BigUint;
use std::mem;

use crate::common::{Error, Result};

/// Unbounded iterator over the Fibonacci sequence, starting at F(0)
#[derive(Debug, Clone)]
pub struct Terms {
    a: BigUint,
    b: BigUint,
}

impl Terms {
    pub fn new() -> Self {
        Self {
            a: BigUint::from(0u8),
            b: BigUint::from(1u8),
        }
    }
}

impl Default for Terms {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Terms {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        // (a, b) <- (b, a + b), yielding the old a
        let sum = &self.a + &self.b;
        let next_b = mem::replace(&mut self.b, sum);
        Some(mem::replace(&mut self.a, next_b))
    }
}

/// Generate the first `count` Fibonacci numbers
///
/// A count of zero or less yields an empty sequence.
pub fn generate(count: i64) -> Vec<BigUint> {
    match usize::try_from(count) {
        Ok(n) => Terms::new().take(n).collect(),
        Err(_) => Vec::new(),
    }
}

/// Compute F(index) with F(0) = 0
pub fn nth_term(index: u64) -> BigUint {
    let mut terms = Terms::new();
    for _ in 0..index {
        terms.next();
    }
    terms.a
}

/// Parse a user-supplied term count
///
/// Surrounding whitespace is ignored. Non-positive counts are accepted here and
/// produce an empty sequence later on.
pub fn parse_count(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidCount(input.to_string()))
}
