//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for
//! producing the next generation from the current population and its fitness.
pub mod generational;

use std::fmt::Debug;

use crate::{
    chromosome::Chromosome, error::Result, evolution::options::EvolutionOptions,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// The `BreedStrategy` trait defines the interface for strategies responsible for
/// breeding a new population out of a scored one.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds the next generation.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current generation.
    /// - `fitness`: The fitness of each individual of `population`, in order.
    /// - `evol_options`: The evolution options specifying algorithm parameters.
    /// - `rng`: The random number generator used for every draw while breeding.
    ///
    /// ## Returns
    ///
    /// A Result containing exactly `evol_options.get_population_size()` new
    /// individuals, or a GeneticError if breeding fails.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty
    /// - The fitness slice does not match the population
    fn breed(
        &self,
        population: &[Chromosome],
        fitness: &[f64],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>>;
}

pub use generational::GenerationalStrategy;
