//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every tunable parameter of an
//! expression search: gene and chromosome width, population size, operator
//! rates, the generation cap, logging and the parallel evaluation threshold.
//!
//! ## Example
//!
//! ```rust
//! use genexpr::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Defaults: 4-bit genes, 20-bit chromosomes, 500 individuals,
//! // crossover 0.7, mutation 0.7, at most 100000 generations.
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 500);
//!
//! let custom_options = EvolutionOptions::builder()
//!     .mutation_rate(0.05)
//!     .max_generations(1000)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//! ```
//!
//! ## Fields
//!
//! - `gene_size`: bits per gene. At least 4 so every symbol has a code.
//! - `chromosome_size`: bits per chromosome, a positive multiple of `gene_size`.
//! - `population_size`: individuals per generation.
//! - `crossover_rate`: probability in `[0, 1]` that a parent pair is crossed.
//! - `mutation_rate`: per-bit flip probability in `[0, 1]`. The default of 0.7
//!   is far above the usual `1 / chromosome_size` and makes mutation dominate
//!   selection; lower it for a more conventional search.
//! - `max_generations`: generation cap after which the search gives up.
//! - `log_level`: see [`LogLevel`].
//! - `parallel_threshold`: population size from which decoding and scoring
//!   run on the rayon thread pool.

use crate::{
    error::{GeneticError, Result},
    gene::{GENE_SIZE, MAX_GENE_SIZE, MIN_GENE_SIZE},
};

/// How much the search reports through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    /// One line per generation plus the best individual of each generation.
    Verbose,
    /// One line per generation.
    Minimal,
    /// Only the final outcome.
    None,
}

const DEFAULT_CHROMOSOME_SIZE: usize = 20;
const DEFAULT_POPULATION_SIZE: usize = 500;
const DEFAULT_CROSSOVER_RATE: f64 = 0.7;
const DEFAULT_MUTATION_RATE: f64 = 0.7;
const DEFAULT_MAX_GENERATIONS: usize = 100_000;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionOptions {
    gene_size: usize,
    chromosome_size: usize,
    population_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    max_generations: usize,
    log_level: LogLevel,
    /// Minimum population size to evaluate in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    /// Checks every parameter, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - `gene_size` is outside `4..=32`
    /// - `chromosome_size` is zero or not a multiple of `gene_size`
    /// - `population_size` is zero
    /// - either rate is outside `[0, 1]` or NaN
    pub fn validate(&self) -> Result<()> {
        if !(MIN_GENE_SIZE..=MAX_GENE_SIZE).contains(&self.gene_size) {
            return Err(GeneticError::Configuration(format!(
                "Gene size must be between {} and {} bits, got {}",
                MIN_GENE_SIZE, MAX_GENE_SIZE, self.gene_size
            )));
        }

        if self.chromosome_size == 0 || self.chromosome_size % self.gene_size != 0 {
            return Err(GeneticError::Configuration(format!(
                "Chromosome size must be a positive multiple of the gene size ({}), got {}",
                self.gene_size, self.chromosome_size
            )));
        }

        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GeneticError::Configuration(format!(
                "Crossover rate must be within [0, 1], got {}",
                self.crossover_rate
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        Ok(())
    }

    pub fn get_gene_size(&self) -> usize {
        self.gene_size
    }

    pub fn get_chromosome_size(&self) -> usize {
        self.chromosome_size
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_gene_size(&mut self, gene_size: usize) {
        self.gene_size = gene_size;
    }

    pub fn set_chromosome_size(&mut self, chromosome_size: usize) {
        self.chromosome_size = chromosome_size;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Parameters that are not set keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genexpr::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(200)
    ///     .crossover_rate(0.9)
    ///     .log_level(LogLevel::Verbose)
    ///     .parallel_threshold(100)
    ///     .build();
    ///
    /// assert_eq!(options.get_population_size(), 200);
    /// assert_eq!(options.get_mutation_rate(), 0.7);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            gene_size: GENE_SIZE,
            chromosome_size: DEFAULT_CHROMOSOME_SIZE,
            population_size: DEFAULT_POPULATION_SIZE,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            mutation_rate: DEFAULT_MUTATION_RATE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            log_level: LogLevel::None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `EvolutionOptions`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    gene_size: Option<usize>,
    chromosome_size: Option<usize>,
    population_size: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    max_generations: Option<usize>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn gene_size(mut self, value: usize) -> Self {
        self.gene_size = Some(value);
        self
    }

    pub fn chromosome_size(mut self, value: usize) -> Self {
        self.chromosome_size = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Call
    /// [`EvolutionOptions::validate`] to check the result.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            gene_size: self.gene_size.unwrap_or(defaults.gene_size),
            chromosome_size: self.chromosome_size.unwrap_or(defaults.chromosome_size),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}
