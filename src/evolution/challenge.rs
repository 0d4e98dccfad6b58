//! # Fitness
//!
//! A [`Challenge`] decides whether a decoded value solves the search and how
//! fit it is otherwise. [`TargetChallenge`] scores by inverse distance to the
//! target number.

use crate::error::{GeneticError, Result};

/// Inverse distance between `value` and `target`: `1 / |target - value|`.
///
/// Undefined when `value == target`; exact matches end the search before any
/// fitness is computed, so callers never hit that case.
///
/// ```rust
/// use genexpr::evolution::challenge::fitness;
///
/// assert_eq!(fitness(10.0, 8.0), 0.5);
/// assert!(fitness(10.0, 9.0) > fitness(10.0, 12.5));
/// ```
pub fn fitness(target: f64, value: f64) -> f64 {
    1.0 / (target - value).abs()
}

/// Judges decoded values against a goal.
pub trait Challenge: Send + Sync {
    /// Whether `value` is an exact solution.
    fn is_solution(&self, value: f64) -> bool;

    /// Non-negative fitness of a decoded value, higher is better.
    ///
    /// `None` means the chromosome did not decode at all.
    fn score(&self, value: Option<f64>) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetChallenge {
    target: f64,
}

impl TargetChallenge {
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `target` is NaN or infinite.
    pub fn new(target: f64) -> Result<Self> {
        if !target.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Target must be a finite number, got {}",
                target
            )));
        }
        Ok(Self { target })
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Challenge for TargetChallenge {
    fn is_solution(&self, value: f64) -> bool {
        value == self.target
    }

    /// Undecodable chromosomes and values poisoned by a division by zero
    /// score `0.0`, the minimum.
    fn score(&self, value: Option<f64>) -> f64 {
        match value {
            Some(v) if v.is_finite() => {
                if self.is_solution(v) {
                    return f64::MAX;
                }
                let score = fitness(self.target, v);
                if score.is_finite() {
                    score
                } else {
                    f64::MAX
                }
            }
            _ => 0.0,
        }
    }
}
