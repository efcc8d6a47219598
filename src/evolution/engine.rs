//! # Generational Driver
//!
//! [`GeneticEngine`] orchestrates one run: it validates the whole
//! configuration up front, builds the initial population, and then repeats
//! evaluate → record best → select → recombine → mutate for a fixed number
//! of generations. Each stage returns a freshly owned population; nothing is
//! mutated in place across generations, and a generation's fitness vector is
//! always complete before selection reads it.
//!
//! The per-generation bests are exposed lazily through the [`Generations`]
//! iterator; [`Generations::finish`] performs a terminal evaluation pass on
//! the last population and returns the overall best.
//!
//! ## Example
//!
//! ```rust
//! use allele::encoding::GeneBounds;
//! use allele::evolution::{EvolutionOptions, GeneticEngine, SelectionPolicy};
//! use allele::individual::Individual;
//! use allele::representation::Representation;
//! use allele::rng::RandomNumberGenerator;
//!
//! let bounds = vec![GeneBounds::new(-5.0, 5.0).unwrap()];
//! let representation = Representation::real(bounds).unwrap();
//! let options = EvolutionOptions::builder()
//!     .population_size(40)
//!     .num_generations(30)
//!     .mutation_rate(0.1)
//!     .build();
//!
//! // Maximize 10 - x^2.
//! let objective = |individual: &Individual| {
//!     let x = individual.as_real().unwrap()[0];
//!     10.0 - x * x
//! };
//!
//! let engine = GeneticEngine::new(representation, options, objective).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let result = engine.run(&mut rng).unwrap();
//! assert!(result.best_fitness > 9.0);
//! ```

use tracing::debug;

use crate::crossover::Recombinator;
use crate::error::{GeneticError, Result};
use crate::fitness::{evaluate, Objective};
use crate::individual::Individual;
use crate::mutation::Mutator;
use crate::representation::Representation;
use crate::rng::RandomNumberGenerator;
use crate::selection::{RouletteWheelSelection, SelectionStrategy, TournamentSelection};

use super::options::{EvolutionOptions, SelectionPolicy};

/// The best individual of one generation, as recorded before the
/// replacement population is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    pub generation: usize,
    pub best_fitness: f64,
    /// The genotype as it exists in the population; binary runs report the
    /// chromosome, not its decoded parameters.
    pub best: Individual,
}

/// The overall outcome of a run, including the terminal evaluation of the
/// last population.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    pub best: Individual,
    pub best_fitness: f64,
}

/// Manages one evolution run over a fixed representation, configuration,
/// and objective.
pub struct GeneticEngine<O: Objective> {
    representation: Representation,
    options: EvolutionOptions,
    objective: O,
    selection: Box<dyn SelectionStrategy>,
    recombinator: Recombinator,
    mutator: Mutator,
}

impl<O: Objective> GeneticEngine<O> {
    /// Creates an engine, validating the whole configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if:
    /// - The population size is zero
    /// - The tournament size is zero or exceeds the population size
    /// - Either operator rate lies outside `[0, 1]`
    pub fn new(
        representation: Representation,
        options: EvolutionOptions,
        objective: O,
    ) -> Result<Self> {
        if options.get_population_size() == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        let selection: Box<dyn SelectionStrategy> = match *options.get_selection() {
            SelectionPolicy::Tournament { size } => {
                if size > options.get_population_size() {
                    return Err(GeneticError::Configuration(format!(
                        "Tournament size ({}) exceeds population size ({})",
                        size,
                        options.get_population_size()
                    )));
                }
                Box::new(TournamentSelection::new(size)?)
            }
            SelectionPolicy::Roulette => Box::new(RouletteWheelSelection::new()),
        };

        let mut recombinator = Recombinator::new(options.get_crossover_rate())?;
        if options.is_arithmetic_gated() {
            recombinator = recombinator.with_gated_arithmetic();
        }
        let mutator = Mutator::new(options.get_mutation_rate())?;

        Ok(Self {
            representation,
            options,
            objective,
            selection,
            recombinator,
            mutator,
        })
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn representation(&self) -> &Representation {
        &self.representation
    }

    /// Initializes a population and returns the lazy per-generation
    /// iterator. A fresh call starts a fresh run; iterators are not
    /// restartable.
    pub fn generations<'a>(
        &'a self,
        rng: &'a mut RandomNumberGenerator,
    ) -> Result<Generations<'a, O>> {
        let population = self
            .representation
            .initialize(self.options.get_population_size(), rng)?;
        Ok(Generations {
            engine: self,
            rng,
            population,
            generation: 0,
            best: None,
            failed: false,
        })
    }

    /// Runs the configured number of generations and returns the overall
    /// best, including the terminal evaluation of the last population.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<EvolutionResult> {
        self.generations(rng)?.finish()
    }

    /// Scores a population. Binary chromosomes are decoded first, so the
    /// objective always receives real parameter vectors in binary runs.
    fn score_population(&self, population: &[Individual]) -> Result<Vec<f64>> {
        match &self.representation {
            Representation::Binary { codec } => {
                let decoded = population
                    .iter()
                    .map(|individual| {
                        let bits = individual.as_binary().ok_or_else(|| {
                            GeneticError::Configuration(format!(
                                "Expected a binary individual, found {}",
                                individual.variant_name()
                            ))
                        })?;
                        Ok(Individual::Real(codec.decode(bits)?))
                    })
                    .collect::<Result<Vec<_>>>()?;
                evaluate(
                    &decoded,
                    &self.objective,
                    self.options.get_parallel_threshold(),
                )
            }
            _ => evaluate(
                population,
                &self.objective,
                self.options.get_parallel_threshold(),
            ),
        }
    }
}

/// Lazy sequence of per-generation bests: yields exactly
/// `num_generations` records, then [`finish`](Self::finish) closes the run
/// with the terminal evaluation pass.
pub struct Generations<'a, O: Objective> {
    engine: &'a GeneticEngine<O>,
    rng: &'a mut RandomNumberGenerator,
    population: Vec<Individual>,
    generation: usize,
    best: Option<(f64, Individual)>,
    failed: bool,
}

impl<O: Objective> Generations<'_, O> {
    /// Evaluates the current population, records its best, and produces the
    /// replacement population.
    fn step(&mut self) -> Result<GenerationRecord> {
        let fitness = self.engine.score_population(&self.population)?;
        let (best_idx, best_fitness) = argmax(&fitness);

        let record = GenerationRecord {
            generation: self.generation,
            best_fitness,
            best: self.population[best_idx].clone(),
        };
        self.track_best(best_fitness, best_idx);

        let selected = self
            .engine
            .selection
            .select(&self.population, &fitness, self.rng)?;
        let offspring = self.engine.recombinator.recombine(&selected, self.rng)?;
        self.population =
            self.engine
                .mutator
                .mutate(offspring, &self.engine.representation, self.rng)?;

        debug!(
            generation = record.generation,
            best_fitness = record.best_fitness,
            "generation evaluated"
        );

        self.generation += 1;
        Ok(record)
    }

    fn track_best(&mut self, fitness: f64, idx: usize) {
        let improved = match &self.best {
            Some((incumbent, _)) => fitness > *incumbent,
            None => true,
        };
        if improved {
            self.best = Some((fitness, self.population[idx].clone()));
        }
    }

    /// Drains any remaining generations, performs the terminal evaluation
    /// pass on the last population, and returns the overall best.
    ///
    /// Undrained generation errors surface here as well.
    pub fn finish(mut self) -> Result<EvolutionResult> {
        while let Some(record) = self.next() {
            record?;
        }

        let fitness = self.engine.score_population(&self.population)?;
        let (best_idx, best_fitness) = argmax(&fitness);
        self.track_best(best_fitness, best_idx);

        let (best_fitness, best) = self.best.ok_or(GeneticError::EmptyPopulation)?;
        Ok(EvolutionResult { best, best_fitness })
    }
}

impl<O: Objective> Iterator for Generations<'_, O> {
    type Item = Result<GenerationRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.generation >= self.engine.options.get_num_generations() {
            return None;
        }
        match self.step() {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

fn argmax(fitness: &[f64]) -> (usize, f64) {
    let mut best_idx = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best_idx] {
            best_idx = i;
        }
    }
    (best_idx, fitness[best_idx])
}
