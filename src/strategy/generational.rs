use super::BreedStrategy;
use crate::{
    chromosome::Chromosome,
    error::Result,
    evolution::options::EvolutionOptions,
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, SelectionStrategy},
};

/// # GenerationalStrategy
///
/// Replaces the whole population every generation. Parents are drawn in
/// independent pairs by the selection strategy; each pair is crossed at a
/// uniformly drawn point with probability `crossover_rate` (otherwise passed
/// through), both children are mutated, and both join the next generation.
/// An odd population size drops the surplus child of the last pair.
///
/// ## Example
///
/// ```rust
/// use genexpr::chromosome::Chromosome;
/// use genexpr::evolution::EvolutionOptions;
/// use genexpr::rng::RandomNumberGenerator;
/// use genexpr::strategy::{BreedStrategy, GenerationalStrategy};
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let options = EvolutionOptions::builder().population_size(5).build();
/// let population: Vec<Chromosome> = (0..5).map(|_| Chromosome::random(20, &mut rng)).collect();
/// let fitness = vec![1.0; 5];
///
/// let next = GenerationalStrategy::new()
///     .breed(&population, &fitness, &options, &mut rng)
///     .unwrap();
/// assert_eq!(next.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerationalStrategy<S = RouletteWheelSelection> {
    selection: S,
}

impl GenerationalStrategy<RouletteWheelSelection> {
    /// Creates a strategy that selects parents by roulette wheel.
    pub fn new() -> Self {
        Self {
            selection: RouletteWheelSelection::new(),
        }
    }
}

impl<S> GenerationalStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    /// Crosses (maybe) and mutates one parent pair.
    fn reproduce(
        &self,
        first: &Chromosome,
        second: &Chromosome,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome, Chromosome)> {
        let (first, second) = if rng.chance(evol_options.get_crossover_rate()) {
            let position = rng.inclusive_index(first.len());
            first.crossover(second, position)?
        } else {
            (first.clone(), second.clone())
        };

        let rate = evol_options.get_mutation_rate();
        Ok((first.mutate(rate, rng), second.mutate(rate, rng)))
    }
}

impl<S> BreedStrategy for GenerationalStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    fn breed(
        &self,
        population: &[Chromosome],
        fitness: &[f64],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        let size = evol_options.get_population_size();
        let pairs = size.div_ceil(2);
        let parents = self.selection.select(population, fitness, pairs * 2, rng)?;

        let mut children = Vec::with_capacity(pairs * 2);
        for pair in parents.chunks_exact(2) {
            let (first, second) = self.reproduce(pair[0], pair[1], evol_options, rng)?;
            children.push(first);
            children.push(second);
        }
        children.truncate(size);

        Ok(children)
    }
}
