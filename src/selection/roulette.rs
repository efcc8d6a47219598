use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_inputs, SelectionStrategy};

/// A selection strategy that selects individuals through roulette wheel
/// selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection)
/// normalizes the fitness vector into a probability distribution and fills
/// each slot of the selected set by one spin of the wheel: draw `u` in
/// `[0, 1)` and pick the first individual whose cumulative probability
/// reaches `u`.
///
/// This strategy requires all fitness values to be non-negative and their
/// sum to be positive; minimization objectives must be transformed first
/// (see [`crate::fitness::Minimize`]).
///
/// # Examples
///
/// ```
/// use allele::individual::Individual;
/// use allele::rng::RandomNumberGenerator;
/// use allele::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// let population = vec![
///     Individual::Real(vec![1.0]),
///     Individual::Real(vec![2.0]),
///     Individual::Real(vec![3.0]),
/// ];
/// let fitness = vec![0.5, 0.8, 0.3];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = RouletteWheelSelection::new();
/// let selected = selection.select(&population, &fitness, &mut rng).unwrap();
/// assert_eq!(selected.len(), 3);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Calculates the cumulative selection probabilities for each
    /// individual based on their fitness share.
    ///
    /// # Errors
    ///
    /// Returns a `DegenerateDistribution` error if any fitness value is
    /// negative or the fitness sum is not positive.
    fn calculate_probabilities(&self, fitness: &[f64]) -> Result<Vec<f64>> {
        if let Some(&bad) = fitness.iter().find(|&&f| f < 0.0) {
            return Err(GeneticError::DegenerateDistribution(format!(
                "Roulette wheel selection requires non-negative fitness values, got {}",
                bad
            )));
        }

        let sum: f64 = fitness.iter().sum();
        if !(sum > 0.0) {
            return Err(GeneticError::DegenerateDistribution(format!(
                "Roulette wheel selection requires a positive fitness sum, got {}",
                sum
            )));
        }

        let mut probs = Vec::with_capacity(fitness.len());
        let mut cumulative = 0.0;
        for &f in fitness {
            cumulative += f / sum;
            probs.push(cumulative);
        }

        // Pin the last probability to exactly 1.0 against accumulated
        // floating-point error.
        if let Some(last) = probs.last_mut() {
            *last = 1.0;
        }

        Ok(probs)
    }

    /// One spin of the wheel: the first index whose cumulative probability
    /// reaches the drawn value, falling back to the last index if rounding
    /// leaves the scan short.
    fn spin(&self, cumulative_probs: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let u = rng.uniform(0.0, 1.0);
        for (i, &prob) in cumulative_probs.iter().enumerate() {
            if u <= prob {
                return i;
            }
        }
        cumulative_probs.len() - 1
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        check_inputs(population, fitness)?;

        let cumulative_probs = self.calculate_probabilities(fitness)?;

        let mut selected = Vec::with_capacity(population.len());
        for _ in 0..population.len() {
            let idx = self.spin(&cumulative_probs, rng);
            selected.push(population[idx].clone());
        }

        Ok(selected)
    }
}
