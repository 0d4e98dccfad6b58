use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. Individuals with a
/// fitness of zero are never picked unless every individual scores zero, in which
/// case the draw is uniform.
///
/// # Examples
///
/// ```
/// use genexpr::chromosome::Chromosome;
/// use genexpr::selection::{RouletteWheelSelection, SelectionStrategy};
/// use genexpr::rng::RandomNumberGenerator;
///
/// let population: Vec<Chromosome> = vec![
///     "0001".parse().unwrap(),
///     "0010".parse().unwrap(),
/// ];
/// let fitness = vec![0.0, 2.0];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let selected = RouletteWheelSelection::new()
///     .select(&population, &fitness, 10, &mut rng)
///     .unwrap();
/// assert!(selected.iter().all(|c| **c == population[1]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select<'a>(
        &self,
        population: &'a [Chromosome],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<&'a Chromosome>> {
        check_lengths(population.len(), fitness.len())?;
        let wheel = Wheel::new(fitness)?;

        Ok((0..num_to_select)
            .map(|_| &population[wheel.spin(rng)])
            .collect())
    }
}

/// Picks one item with probability proportional to its weight.
///
/// Draws a uniform value in `[0, sum(weights))` and returns the first item whose
/// cumulative weight exceeds it. Should rounding leave the draw uncovered, the
/// last item is returned. If every weight is zero the pick is uniform.
///
/// # Errors
///
/// Returns an error if `items` is empty, the lengths differ, or a weight is
/// negative or not finite.
///
/// ```rust
/// use genexpr::selection::weighted_random_selection;
/// use genexpr::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let picked = weighted_random_selection(&["a", "b", "c"], &[0.0, 0.0, 1.0], &mut rng).unwrap();
/// assert_eq!(*picked, "c");
/// ```
pub fn weighted_random_selection<'a, T>(
    items: &'a [T],
    weights: &[f64],
    rng: &mut RandomNumberGenerator,
) -> Result<&'a T> {
    check_lengths(items.len(), weights.len())?;
    let wheel = Wheel::new(weights)?;
    Ok(&items[wheel.spin(rng)])
}

fn check_lengths(population: usize, fitness: usize) -> Result<()> {
    if population == 0 {
        return Err(GeneticError::EmptyPopulation);
    }

    if fitness != population {
        return Err(GeneticError::Selection(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness, population
        )));
    }

    Ok(())
}

/// Cumulative weights of a non-empty population.
#[derive(Debug)]
struct Wheel {
    cumulative: Vec<f64>,
    total: f64,
}

impl Wheel {
    fn new(weights: &[f64]) -> Result<Self> {
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(GeneticError::Selection(format!(
                "Roulette wheel selection requires finite, non-negative fitness values, got {}",
                bad
            )));
        }

        let wheel = Self::accumulate(weights.iter().copied());
        if wheel.total.is_finite() {
            return Ok(wheel);
        }

        // The sum overflowed; rescale so the largest weight is 1.
        let max = weights.iter().copied().fold(0.0_f64, f64::max);
        Ok(Self::accumulate(weights.iter().map(|w| w / max)))
    }

    fn accumulate(weights: impl Iterator<Item = f64>) -> Self {
        let mut total = 0.0;
        let cumulative = weights
            .map(|w| {
                total += w;
                total
            })
            .collect();

        Self { cumulative, total }
    }

    fn spin(&self, rng: &mut RandomNumberGenerator) -> usize {
        let last = self.cumulative.len() - 1;

        if self.total <= 0.0 {
            return rng.inclusive_index(last);
        }

        let draw = rng.uniform(0.0, self.total);
        let idx = self.cumulative.partition_point(|&c| c <= draw);
        idx.min(last)
    }
}
