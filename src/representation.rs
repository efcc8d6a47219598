//! # Chromosome Representations
//!
//! The [`Representation`] enum carries the static, per-run data of a
//! chromosome encoding (bounds, codec, or index domain) and knows how to
//! build an initial population for it. Constructors validate configuration
//! eagerly, so a held `Representation` is always usable.

use crate::encoding::{BinaryCodec, GeneBounds};
use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// The chromosome representation of a run, with its static parameters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Representation {
    /// Bounded real-valued vectors, one bound pair per gene.
    Real { bounds: Vec<GeneBounds> },
    /// Fixed-width binary chromosomes quantized through a codec.
    Binary { codec: BinaryCodec },
    /// Vectors of `genes` distinct indices into `[0, domain_size)`.
    Index { domain_size: usize, genes: usize },
}

impl Representation {
    /// Creates a real-valued representation.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `bounds` is empty.
    pub fn real(bounds: Vec<GeneBounds>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(GeneticError::Configuration(
                "Real representation requires at least one gene dimension".to_string(),
            ));
        }
        Ok(Self::Real { bounds })
    }

    /// Creates a binary representation backed by `codec`.
    pub fn binary(codec: BinaryCodec) -> Self {
        Self::Binary { codec }
    }

    /// Creates a distinct-index representation: individuals hold `genes`
    /// distinct positions in `[0, domain_size)`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `genes` is zero or exceeds
    /// `domain_size` (the uniqueness invariant would be unsatisfiable).
    pub fn index(domain_size: usize, genes: usize) -> Result<Self> {
        if genes == 0 {
            return Err(GeneticError::Configuration(
                "Index representation requires at least one gene".to_string(),
            ));
        }
        if genes > domain_size {
            return Err(GeneticError::Configuration(format!(
                "Cannot draw {} distinct indices from a domain of size {}",
                genes, domain_size
            )));
        }
        Ok(Self::Index { domain_size, genes })
    }

    /// The number of genes per individual (bits count as genes for binary
    /// chromosomes only at the encoding level; here the binary gene count is
    /// the number of encoded dimensions).
    pub fn gene_count(&self) -> usize {
        match self {
            Representation::Real { bounds } => bounds.len(),
            Representation::Binary { codec } => codec.gene_count(),
            Representation::Index { genes, .. } => *genes,
        }
    }

    /// Builds the initial population: `size` freshly drawn individuals.
    ///
    /// - Real: independent uniform draws within each bound pair.
    /// - Binary: a uniform in-bounds real vector, encoded; the binary
    ///   population is the coded form of a random real one.
    /// - Index: distinct values sampled uniformly without replacement.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `size` is zero.
    pub fn initialize(
        &self,
        size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if size == 0 {
            return Err(GeneticError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }

        let mut population = Vec::with_capacity(size);
        for _ in 0..size {
            population.push(self.random_individual(rng)?);
        }
        Ok(population)
    }

    fn random_individual(&self, rng: &mut RandomNumberGenerator) -> Result<Individual> {
        match self {
            Representation::Real { bounds } => Ok(Individual::Real(Self::random_real(bounds, rng))),
            Representation::Binary { codec } => {
                let genes = Self::random_real(codec.bounds(), rng);
                Ok(Individual::Binary(codec.encode(&genes)?))
            }
            Representation::Index { domain_size, genes } => {
                Ok(Individual::Index(rng.sample_distinct(*domain_size, *genes)))
            }
        }
    }

    fn random_real(bounds: &[GeneBounds], rng: &mut RandomNumberGenerator) -> Vec<f64> {
        bounds
            .iter()
            .map(|b| rng.uniform(b.lower(), b.upper()))
            .collect()
    }
}
