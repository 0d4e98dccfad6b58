//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! search. It is owned by the caller and passed down explicitly, so a search
//! seeded with `from_seed` replays exactly.
//!
//! ## Example
//!
//! ```rust
//! use genexpr::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let genome = rng.random_bits(20);
//!
//! assert_eq!(genome.len(), 20);
//! assert!((0.0..1.0).contains(&rng.uniform(0.0, 1.0)));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
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

    /// Draws a single value in `[from, to)`.
    ///
    /// An empty range (`from >= to`) yields `from`.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        if from >= to {
            return from;
        }
        self.rng.gen_range(from..to)
    }

    /// Returns `true` with probability `probability`.
    ///
    /// Values outside `[0, 1]` are clamped.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Draws an index in `0..=upper`.
    pub fn inclusive_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }

    /// Draws `len` independent, uniformly distributed bits.
    pub fn random_bits(&mut self, len: usize) -> Vec<bool> {
        (0..len).map(|_| self.rng.gen::<bool>()).collect()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
