//! # Error Types
//!
//! This module defines custom error types for the genetic algorithm engine.
//! It provides specific error variants for the failure scenarios that may
//! occur while configuring or running an evolution.
//!
//! All errors are raised synchronously at the point of detection. The
//! generational driver never catches and retries: a malformed configuration
//! is a fatal failure at engine construction, not mid-run.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use allele::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm engine.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when a gene value falls outside its declared bound
    /// pair, e.g. when encoding a real vector to a binary chromosome.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Error that occurs when a sequence length does not match its
    /// declaration: a bitstring shorter than the sum of the bit widths, or a
    /// fitness vector that does not match its population.
    #[error("Length error: {0}")]
    Length(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when roulette-wheel selection is attempted over
    /// fitness values that do not form a distribution (negative entries or a
    /// non-positive sum).
    #[error("Degenerate distribution: {0}")]
    DegenerateDistribution(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation produces an unusable
    /// score, such as NaN or infinity.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use allele::error::{GeneticError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;
