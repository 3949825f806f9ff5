//! Injected random source.
//!
//! Every random draw the widget makes (color channels, quote index) goes
//! through [`RandomSource`], so tests and replays can drive the exact
//! sequence instead of patching a global generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random integers.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Uniform integer in `0..upper`. Callers never pass `upper == 0`.
    fn next_below(&mut self, upper: usize) -> usize;
}

/// Production source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RngSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for RngSource {
    fn next_below(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "next_below requires a non-empty range");
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed sequence of values, cycling once exhausted.
///
/// Each value is reduced modulo `upper`, so a script written for one
/// range never escapes another.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// An empty script behaves as an endless run of zeros.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws served so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_below(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0, "next_below requires a non-empty range");
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value % upper
    }
}
