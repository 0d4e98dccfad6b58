use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::{
    challenge::{Challenge, TargetChallenge},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    chromosome::Chromosome,
    decoder::{decode, render_text, NumericCombine},
    error::Result,
    rng::RandomNumberGenerator,
    strategy::{BreedStrategy, GenerationalStrategy},
};

/// Outcome of a search: the first exact match found, if any, and the
/// generation the search stopped at.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// The matching chromosome, or `None` if the generation cap was reached.
    pub expression: Option<Chromosome>,
    /// Display form of `expression`, e.g. `2 * 4 + 2`.
    pub text: Option<String>,
    /// Generation of the match, or the cap on failure.
    pub generation: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.expression.is_some()
    }

    /// Human-readable report of the outcome for `target`.
    ///
    /// ```rust
    /// use genexpr::evolution::SearchOutcome;
    ///
    /// let failed = SearchOutcome { expression: None, text: None, generation: 42 };
    /// assert_eq!(
    ///     failed.describe(10.0),
    ///     "Failed to find an expression after 42 generations"
    /// );
    /// ```
    pub fn describe(&self, target: f64) -> String {
        match &self.text {
            Some(text) if self.found() => format!(
                "Found an expression after {} generations:\n\n  {:.1} = {}",
                self.generation, target, text
            ),
            _ => format!(
                "Failed to find an expression after {} generations",
                self.generation
            ),
        }
    }
}

/// Runs the generational loop with a breeding strategy and a challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    strategy: Strategy,
    challenge: Chall,
}

impl<Strategy, Chall> EvolutionLauncher<Strategy, Chall>
where
    Strategy: BreedStrategy,
    Chall: Challenge,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy and challenge.
    pub fn new(strategy: Strategy, challenge: Chall) -> Self {
        Self {
            strategy,
            challenge,
        }
    }

    /// Evolves random chromosomes until one decodes to a solution of the
    /// challenge or `max_generations` generations have been evaluated.
    ///
    /// The generation counter starts at 1 for the initial population. When
    /// several chromosomes of one generation match, the first in population
    /// order wins. Running out of generations is not an error: the outcome
    /// then has no expression and `generation == max_generations`.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail [`EvolutionOptions::validate`]
    /// - The breeding strategy fails
    ///
    /// # Performance
    ///
    /// Populations at or above the parallel threshold are decoded and scored
    /// on the rayon thread pool. Results are identical to the sequential path.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<SearchOutcome> {
        if let Err(e) = options.validate() {
            warn!("Rejecting evolution options: {}", e);
            return Err(e);
        }

        let gene_size = options.get_gene_size();
        let mut population: Vec<Chromosome> = (0..options.get_population_size())
            .map(|_| Chromosome::random(options.get_chromosome_size(), rng))
            .collect();

        let mut generation = 0;
        while generation < options.get_max_generations() {
            generation += 1;

            if !matches!(options.get_log_level(), LogLevel::None) {
                info!("Generation {}...", generation);
            }

            let (values, fitness): (Vec<Option<f64>>, Vec<f64>) = self
                .evaluate_population(&population, options)
                .into_iter()
                .unzip();

            if let Some(idx) = values
                .iter()
                .position(|value| matches!(value, Some(v) if self.challenge.is_solution(*v)))
            {
                let expression = population.swap_remove(idx);
                let text = render_text(&expression, gene_size);
                info!(
                    generation,
                    expression = text.as_deref().unwrap_or_default(),
                    "Found an exact match"
                );
                return Ok(SearchOutcome {
                    expression: Some(expression),
                    text,
                    generation,
                });
            }

            if matches!(options.get_log_level(), LogLevel::Verbose) {
                self.log_best(&population, &fitness, gene_size, generation);
            }

            population = self.strategy.breed(&population, &fitness, options, rng)?;
        }

        info!(generation, "No exact match found");
        Ok(SearchOutcome {
            expression: None,
            text: None,
            generation,
        })
    }

    /// Decodes and scores every chromosome, in population order.
    fn evaluate_population(
        &self,
        population: &[Chromosome],
        options: &EvolutionOptions,
    ) -> Vec<(Option<f64>, f64)> {
        let gene_size = options.get_gene_size();
        let evaluate = |chromosome: &Chromosome| {
            let value = decode(chromosome, gene_size, &NumericCombine);
            (value, self.challenge.score(value))
        };

        if population.len() >= options.get_parallel_threshold() {
            population.par_iter().map(evaluate).collect()
        } else {
            population.iter().map(evaluate).collect()
        }
    }

    fn log_best(
        &self,
        population: &[Chromosome],
        fitness: &[f64],
        gene_size: usize,
        generation: usize,
    ) {
        let best = fitness
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((idx, score)) = best {
            let text = render_text(&population[idx], gene_size);
            debug!(
                generation,
                chromosome = %population[idx],
                expression = text.as_deref().unwrap_or("<empty>"),
                fitness = score,
                "Best individual"
            );
        }
    }
}

/// Searches for an expression that evaluates to `target` using the default
/// generational strategy with roulette wheel selection.
///
/// # Errors
///
/// Returns `GeneticError::Configuration` if `target` is not finite or the
/// options are invalid.
///
/// ```rust
/// use genexpr::evolution::{search, EvolutionOptions};
/// use genexpr::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(10);
/// let options = EvolutionOptions::builder().max_generations(500).build();
/// let outcome = search(7.0, &options, &mut rng).unwrap();
///
/// assert!(outcome.generation <= 500);
/// ```
pub fn search(
    target: f64,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<SearchOutcome> {
    let challenge = TargetChallenge::new(target)?;
    EvolutionLauncher::new(GenerationalStrategy::new(), challenge).evolve(options, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::render_value;
    use crate::error::GeneticError;

    #[test]
    fn test_zero_generations() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let options = EvolutionOptions::builder().max_generations(0).build();

        let outcome = search(10.0, &options, &mut rng).unwrap();
        assert!(!outcome.found());
        assert_eq!(outcome.generation, 0);
    }

    #[test]
    fn test_unreachable_target_exhausts() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let options = EvolutionOptions::builder()
            .population_size(20)
            .max_generations(15)
            .build();

        // Five single digits cannot get near this
        let outcome = search(1e9, &options, &mut rng).unwrap();
        assert!(!outcome.found());
        assert_eq!(outcome.text, None);
        assert_eq!(outcome.generation, 15);
    }

    #[test]
    fn test_single_digit_found_in_first_generation() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let options = EvolutionOptions::default();

        // With 500 random genomes some decode to plain 0
        let outcome = search(0.0, &options, &mut rng).unwrap();
        assert!(outcome.found());
        assert_eq!(outcome.generation, 1);
        assert_eq!(
            render_value(outcome.expression.as_ref().unwrap(), options.get_gene_size()),
            Some(0.0)
        );
    }

    #[test]
    fn test_invalid_options_rejected() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let options = EvolutionOptions::builder().population_size(0).build();

        let result = search(10.0, &options, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_non_finite_target_rejected() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let result = search(f64::NAN, &EvolutionOptions::default(), &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let sequential = EvolutionOptions::builder()
            .population_size(64)
            .max_generations(200)
            .parallel_threshold(usize::MAX)
            .build();
        let parallel = EvolutionOptions::builder()
            .population_size(64)
            .max_generations(200)
            .parallel_threshold(1)
            .build();

        let a = search(23.0, &sequential, &mut RandomNumberGenerator::from_seed(77)).unwrap();
        let b = search(23.0, &parallel, &mut RandomNumberGenerator::from_seed(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_evaluation_scores_in_population_order() {
        let challenge = TargetChallenge::new(10.0).unwrap();
        let launcher = EvolutionLauncher::new(GenerationalStrategy::new(), challenge);
        // 2 * 4 + 2 and a genome with no assigned gene at all
        let population: Vec<Chromosome> = vec![
            "0010 1100 0100 1010 0010".parse().unwrap(),
            "1110 1111 1110 1111 1110".parse().unwrap(),
        ];

        for threshold in [1, usize::MAX] {
            let options = EvolutionOptions::builder()
                .population_size(2)
                .parallel_threshold(threshold)
                .build();
            let evaluated = launcher.evaluate_population(&population, &options);

            assert_eq!(evaluated, vec![(Some(10.0), f64::MAX), (None, 0.0)]);
        }
    }

    #[test]
    fn test_describe_success() {
        let expression: Chromosome = "0010 1100 0100 1010 0010".parse().unwrap();
        let outcome = SearchOutcome {
            expression: Some(expression),
            text: Some("2 * 4 + 2".to_string()),
            generation: 3,
        };

        assert_eq!(
            outcome.describe(10.0),
            "Found an expression after 3 generations:\n\n  10.0 = 2 * 4 + 2"
        );
    }
}
