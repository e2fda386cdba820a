//! # Random Source
//!
//! Uniform randomness as an injected capability.
//!
//! ## Design
//!
//! A `RandomSource` yields floats in `[0, 1)`, the same contract as the
//! host's `Math.random()`. Integers are derived from it by `random_int`.
//!
//! - `ThreadRandom`: thread-local generator, no determinism
//! - `SeededRandom`: fixed seed, same sequence every run (for tests)

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Uniform random source
pub trait RandomSource {
    /// Returns a float uniformly distributed in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

/// Thread-local random source
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    /// Creates a source backed by the thread-local generator
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Deterministic random source
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a source that replays the same sequence for the same seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Returns an integer in `[0, max)`, computed as `floor(uniform * max)`
///
/// `max == 0` yields 0.
pub fn random_int<R: RandomSource + ?Sized>(rng: &mut R, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let value = (rng.next_unit() * f64::from(max)).floor() as u32;
    // A source that returns exactly 1.0 would otherwise yield `max`.
    value.min(max - 1)
}
