use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for parent-selection strategies.
///
/// A selection strategy fills the next selected set from the current
/// population based on its fitness vector. Selection is with replacement:
/// an individual may be chosen for multiple slots, and the selected set
/// always has exactly as many members as the population.
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
/// ];
/// let fitness = vec![0.5, 0.8, 0.3];
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = TournamentSelection::new(2).unwrap();
/// let selected = selection.select(&population, &fitness, &mut rng).unwrap();
/// assert_eq!(selected.len(), population.len());
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `population.len()` individuals, with replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    /// - The strategy's own preconditions fail (see the implementations)
    fn select(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

/// Shared precondition checks for the selection strategies.
pub(crate) fn check_inputs(population: &[Individual], fitness: &[f64]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    if fitness.len() != population.len() {
        return Err(GeneticError::Length(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }
    Ok(())
}
