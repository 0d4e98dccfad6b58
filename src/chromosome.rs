//! # Chromosome
//!
//! A `Chromosome` is an immutable, fixed-length bit string holding a sequence
//! of genes. The genetic operators never modify a chromosome in place:
//! [`Chromosome::crossover`] and [`Chromosome::mutate`] both return new ones.
//!
//! Chromosomes can be written literally as strings of `0` and `1`. Spaces and
//! underscores are ignored, which makes gene boundaries easy to show:
//!
//! ```rust
//! use genexpr::chromosome::Chromosome;
//!
//! let chromosome: Chromosome = "0010 1100 0100 1010 0010".parse().unwrap();
//! assert_eq!(chromosome.len(), 20);
//! assert_eq!(chromosome.to_string(), "00101100010010100010");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a chromosome of `len` independently drawn, uniform bits.
    pub fn random(len: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            bits: rng.random_bits(len),
        }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Single-point crossover at `position`.
    ///
    /// The first child takes `self` up to `position` and `other` from there on;
    /// the second child is the complement. `position` may be anywhere in
    /// `0..=len`, so `0` swaps the parents and `len` returns them unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidChromosome` if the parents differ in length
    /// or `position` lies past their end.
    ///
    /// ```rust
    /// use genexpr::chromosome::Chromosome;
    ///
    /// let c1: Chromosome = "11110000".parse().unwrap();
    /// let c2: Chromosome = "00001111".parse().unwrap();
    /// let (a, b) = c1.crossover(&c2, 4).unwrap();
    /// assert_eq!(a.to_string(), "11111111");
    /// assert_eq!(b.to_string(), "00000000");
    /// ```
    pub fn crossover(&self, other: &Self, position: usize) -> Result<(Self, Self)> {
        if self.len() != other.len() {
            return Err(GeneticError::InvalidChromosome(format!(
                "Cannot cross chromosomes of different lengths ({} and {})",
                self.len(),
                other.len()
            )));
        }

        if position > self.len() {
            return Err(GeneticError::InvalidChromosome(format!(
                "Crossover position {} exceeds chromosome length {}",
                position,
                self.len()
            )));
        }

        let (head1, tail1) = self.bits.split_at(position);
        let (head2, tail2) = other.bits.split_at(position);

        let first = Self {
            bits: [head1, tail2].concat(),
        };
        let second = Self {
            bits: [head2, tail1].concat(),
        };

        Ok((first, second))
    }

    /// Flips every bit independently with probability `rate`.
    pub fn mutate(&self, rate: f64, rng: &mut RandomNumberGenerator) -> Self {
        let bits = self
            .bits
            .iter()
            .map(|&bit| if rng.chance(rate) { !bit } else { bit })
            .collect();

        Self { bits }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GeneticError::InvalidChromosome(format!(
                    "Unexpected character '{}' in bit string",
                    other
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;

        Ok(Self { bits })
    }
}
