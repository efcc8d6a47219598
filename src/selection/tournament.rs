use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_inputs, SelectionStrategy};

/// A selection strategy that selects individuals through tournament
/// selection.
///
/// Each slot of the selected set is filled by sampling `tournament_size`
/// distinct competitors uniformly from the population and keeping the one
/// with the highest fitness; ties go to the first competitor encountered.
/// Tournaments are independent, so an individual can win several slots.
///
/// Tournament selection provides a balance between exploration and
/// exploitation:
/// - A tournament size of 1 degenerates to uniform random selection
/// - Larger tournament sizes focus more strongly on the best individuals
///
/// # Examples
///
/// ```
/// use allele::individual::Individual;
/// use allele::rng::RandomNumberGenerator;
/// use allele::selection::{SelectionStrategy, TournamentSelection};
///
/// let population = vec![
///     Individual::Real(vec![1.0]),
///     Individual::Real(vec![2.0]),
///     Individual::Real(vec![3.0]),
///     Individual::Real(vec![4.0]),
/// ];
/// let fitness = vec![0.5, 0.8, 0.3, 0.9];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = TournamentSelection::new(3).unwrap();
/// let selected = selection.select(&population, &fitness, &mut rng).unwrap();
/// assert_eq!(selected.len(), 4);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified
    /// tournament size.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let competitors = rng.sample_distinct(fitness.len(), self.tournament_size);

        let mut best_idx = competitors[0];
        let mut best_fitness = fitness[best_idx];
        for &idx in &competitors[1..] {
            if fitness[idx] > best_fitness {
                best_idx = idx;
                best_fitness = fitness[idx];
            }
        }
        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        // Safe to unwrap because the default size is valid
        Self::new(3).unwrap()
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        check_inputs(population, fitness)?;

        if self.tournament_size > population.len() {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                population.len()
            )));
        }

        let mut selected = Vec::with_capacity(population.len());
        for _ in 0..population.len() {
            let winner_idx = self.run_tournament(fitness, rng);
            selected.push(population[winner_idx].clone());
        }

        Ok(selected)
    }
}
