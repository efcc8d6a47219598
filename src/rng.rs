//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for
//! the whole engine. Every stochastic operator (initialization, selection,
//! crossover, mutation) draws from one injected instance, so a run seeded
//! with [`RandomNumberGenerator::from_seed`] is fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use allele::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let x = rng.uniform(0.0, 1.0);
//! assert!((0.0..1.0).contains(&x));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// genetic operators need: uniform reals, uniform indices, Bernoulli trials,
/// and distinct-index samples.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system
    /// entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws one uniform value from `[from, to)`.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..to)
    }

    /// Draws one uniform value from the closed interval `[from, to]`.
    pub fn uniform_inclusive(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..=to)
    }

    /// Draws one uniform index from `[0, n)`.
    ///
    /// `n` must be positive; callers validate their domains before drawing.
    pub fn below(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    /// Runs one Bernoulli trial with success probability `p`.
    ///
    /// `p` must lie in `[0, 1]`; operator constructors enforce this before
    /// any trial is run.
    pub fn happens(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Samples `amount` distinct indices uniformly without replacement from
    /// `[0, n)`. The returned order is random.
    ///
    /// `amount` must not exceed `n`; callers validate this as a
    /// configuration check.
    pub fn sample_distinct(&mut self, n: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, n, amount).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
