//! # Individuals
//!
//! One candidate solution in the population, in one of the three chromosome
//! representations the engine supports. Operators dispatch over the
//! [`Individual`] variants rather than over a trait: the representation is a
//! closed set, and the tagged enum keeps mixed-representation populations a
//! detectable error instead of a type-system accident.
//!
//! - [`Individual::Real`] — a bounded real-valued parameter vector.
//! - [`Individual::Binary`] — a fixed-width binary chromosome, see
//!   [`crate::encoding::BinaryCodec`].
//! - [`Individual::Index`] — distinct integer indices into `[0, N)`,
//!   modelling non-repeating grid-cell assignment.

use std::fmt;
use std::str::FromStr;

use crate::error::GeneticError;

/// A fixed-length string of bits, the genotype of a binary-encoded
/// individual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Inverts the bit at `locus`.
    ///
    /// # Panics
    ///
    /// Panics if `locus` is out of range. The mutator draws loci from
    /// `[0, len)`, so it never trips this.
    pub fn flip(&mut self, locus: usize) {
        self.bits[locus] = !self.bits[locus];
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GeneticError::Domain(format!(
                    "Invalid character '{}' in bitstring",
                    other
                ))),
            })
            .collect::<Result<Vec<bool>, _>>()
            .map(Self::new)
    }
}

/// One candidate solution, tagged by its chromosome representation.
///
/// All individuals in one population share a single variant; the operators
/// report a configuration error when they encounter a mixed pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Individual {
    /// A real-valued parameter vector, one gene per dimension.
    Real(Vec<f64>),
    /// A fixed-width binary chromosome.
    Binary(BitString),
    /// Distinct indices into a discrete domain `[0, N)`.
    Index(Vec<usize>),
}

impl Individual {
    /// The number of genes: vector length for real and index individuals,
    /// bit count for binary ones.
    pub fn len(&self) -> usize {
        match self {
            Individual::Real(genes) => genes.len(),
            Individual::Binary(bits) => bits.len(),
            Individual::Index(genes) => genes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The representation name, used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Individual::Real(_) => "real",
            Individual::Binary(_) => "binary",
            Individual::Index(_) => "index",
        }
    }

    /// Returns the real-valued genes, if this is a real individual.
    pub fn as_real(&self) -> Option<&[f64]> {
        match self {
            Individual::Real(genes) => Some(genes),
            _ => None,
        }
    }

    /// Returns the binary chromosome, if this is a binary individual.
    pub fn as_binary(&self) -> Option<&BitString> {
        match self {
            Individual::Binary(bits) => Some(bits),
            _ => None,
        }
    }

    /// Returns the index genes, if this is an index individual.
    pub fn as_index(&self) -> Option<&[usize]> {
        match self {
            Individual::Index(genes) => Some(genes),
            _ => None,
        }
    }
}
