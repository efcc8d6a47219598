pub mod crossover;
pub mod encoding;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod individual;
pub mod mutation;
pub mod representation;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use crossover::Recombinator;
pub use encoding::{BinaryCodec, GeneBounds};
pub use error::{GeneticError, Result};
pub use evolution::{
    EvolutionOptions, EvolutionResult, GenerationRecord, Generations, GeneticEngine,
    SelectionPolicy,
};
pub use fitness::{Minimize, Objective};
pub use individual::{BitString, Individual};
pub use mutation::Mutator;
pub use representation::Representation;
pub use rng::RandomNumberGenerator;
