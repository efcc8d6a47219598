//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of a run:
//! population size, generation count, selection policy, operator rates, and
//! the parallel-evaluation threshold. Options are supplied once at engine
//! construction and never mutated mid-run.
//!
//! ## Example
//!
//! ```rust
//! use allele::evolution::options::{EvolutionOptions, SelectionPolicy};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(150)
//!     .num_generations(50)
//!     .selection(SelectionPolicy::Tournament { size: 3 })
//!     .crossover_rate(0.6)
//!     .mutation_rate(0.01)
//!     .build();
//!
//! assert_eq!(options.get_population_size(), 150);
//! ```

/// The parent-selection policy of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Best-of-`size` tournaments, repeated to fill the selected set.
    Tournament { size: usize },
    /// Fitness-proportionate (roulette wheel) selection.
    Roulette,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    selection: SelectionPolicy,
    crossover_rate: f64,
    mutation_rate: f64,
    gate_arithmetic: bool,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_selection(&self) -> &SelectionPolicy {
        &self.selection
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Whether the crossover-rate gate also applies to arithmetic
    /// (real-vector) crossover. Ungated by default.
    pub fn is_arithmetic_gated(&self) -> bool {
        self.gate_arithmetic
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use allele::evolution::options::{EvolutionOptions, SelectionPolicy};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .population_size(50)
    ///     .selection(SelectionPolicy::Roulette)
    ///     .build();
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 100,
            selection: SelectionPolicy::Tournament { size: 3 },
            crossover_rate: 0.6,
            mutation_rate: 0.01,
            gate_arithmetic: false,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions`
/// instances. Range checks (rates in `[0, 1]`, tournament size against the
/// population) happen at engine construction, where the whole configuration
/// is visible.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    selection: Option<SelectionPolicy>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    gate_arithmetic: Option<bool>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the selection policy.
    pub fn selection(mut self, value: SelectionPolicy) -> Self {
        self.selection = Some(value);
        self
    }

    /// Sets the per-pair crossover rate.
    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    /// Sets the per-gene (binary: per-individual) mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Applies the crossover-rate gate to arithmetic crossover too.
    pub fn gate_arithmetic(mut self, value: bool) -> Self {
        self.gate_arithmetic = Some(value);
        self
    }

    /// Sets the parallel evaluation threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            selection: self.selection.unwrap_or(defaults.selection),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            gate_arithmetic: self.gate_arithmetic.unwrap_or(defaults.gate_arithmetic),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}
