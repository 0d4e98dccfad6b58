use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// Selection strategies choose parents from a population based on their
/// fitness scores. Individuals may be chosen more than once.
///
/// # Examples
///
/// ```
/// use genexpr::chromosome::Chromosome;
/// use genexpr::selection::{RouletteWheelSelection, SelectionStrategy};
/// use genexpr::rng::RandomNumberGenerator;
/// use genexpr::error::Result;
///
/// fn main() -> Result<()> {
///     let population: Vec<Chromosome> = vec!["0001".parse()?, "0010".parse()?, "0011".parse()?];
///     let fitness = vec![0.5, 0.8, 0.3];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selected = RouletteWheelSelection::new().select(&population, &fitness, 4, &mut rng)?;
///     assert_eq!(selected.len(), 4);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Draws `num_to_select` individuals from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - A fitness value is negative or not finite
    fn select<'a>(
        &self,
        population: &'a [Chromosome],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<&'a Chromosome>>;
}
