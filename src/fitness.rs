//! # Fitness Evaluation
//!
//! The [`Objective`] trait is the engine's only point of contact with a
//! specific optimization problem. Higher fitness is better by convention
//! throughout the crate; a minimization objective is adapted with
//! [`Minimize`], which maps it through `1 / (objective + epsilon)`.
//!
//! [`evaluate`] maps a population to its fitness vector, in order, and
//! switches to parallel scoring once the population is large enough for the
//! fan-out to pay off. Either way the full vector is produced before the
//! caller can select on it.

use rayon::prelude::*;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;

/// A fitness function over individuals. Implemented for any
/// `Fn(&Individual) -> f64` closure.
///
/// Binary chromosomes are decoded by the engine before scoring, so an
/// objective in a binary run receives [`Individual::Real`] values.
///
/// # Examples
///
/// ```
/// use allele::fitness::Objective;
/// use allele::individual::Individual;
///
/// let sphere = |individual: &Individual| -> f64 {
///     let genes = individual.as_real().expect("real individual");
///     10.0 - genes.iter().map(|x| x * x).sum::<f64>()
/// };
///
/// assert_eq!(sphere.score(&Individual::Real(vec![1.0, 2.0])), 5.0);
/// ```
pub trait Objective: Send + Sync {
    /// Scores one individual. Higher is better.
    fn score(&self, individual: &Individual) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&Individual) -> f64 + Send + Sync,
{
    fn score(&self, individual: &Individual) -> f64 {
        self(individual)
    }
}

/// Adapts a minimization objective into a maximized fitness via
/// `1 / (objective + epsilon)`.
///
/// The epsilon keeps the fitness finite when the objective reaches zero and
/// keeps roulette selection fed with positive values.
#[derive(Debug, Clone)]
pub struct Minimize<O> {
    inner: O,
    epsilon: f64,
}

impl<O: Objective> Minimize<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            epsilon: 1e-6,
        }
    }

    /// Overrides the regularizing epsilon.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error unless `epsilon` is positive.
    pub fn with_epsilon(mut self, epsilon: f64) -> Result<Self> {
        if !(epsilon > 0.0) {
            return Err(GeneticError::Configuration(format!(
                "Minimize epsilon must be positive, got {}",
                epsilon
            )));
        }
        self.epsilon = epsilon;
        Ok(self)
    }
}

impl<O: Objective> Objective for Minimize<O> {
    fn score(&self, individual: &Individual) -> f64 {
        1.0 / (self.inner.score(individual) + self.epsilon)
    }
}

/// Computes the fitness vector of a population: same order, same length.
///
/// Scoring runs in parallel once the population reaches
/// `parallel_threshold`; below that the rayon fan-out costs more than it
/// saves. The fitness vector is complete before this function returns, so
/// selection never observes partial scores.
///
/// # Errors
///
/// - `EmptyPopulation` if `population` is empty.
/// - `FitnessCalculation` if any score is NaN or infinite.
pub fn evaluate<O: Objective>(
    population: &[Individual],
    objective: &O,
    parallel_threshold: usize,
) -> Result<Vec<f64>> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    let score_one = |individual: &Individual| -> Result<f64> {
        let score = objective.score(individual);
        if !score.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                score
            )));
        }
        Ok(score)
    };

    if population.len() >= parallel_threshold {
        population.par_iter().map(score_one).collect()
    } else {
        population.iter().map(score_one).collect()
    }
}
