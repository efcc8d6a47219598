pub mod engine;
pub mod options;

pub use engine::{EvolutionResult, GenerationRecord, Generations, GeneticEngine};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, SelectionPolicy};
