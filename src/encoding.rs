//! # Binary Encoding Codec
//!
//! Conversion between real-valued parameter vectors and fixed-width binary
//! chromosomes. Each gene is quantized onto `2^w` levels across its bound
//! pair and rendered as a zero-padded, MSB-first field of exactly `w` bits;
//! fields are concatenated in gene order. The codec is pure and stateless:
//! encode then decode is lossy only up to one quantization step
//! `(upper - lower) / (2^w - 1)` per gene.
//!
//! ## Example
//!
//! ```rust
//! use allele::encoding::{BinaryCodec, GeneBounds};
//!
//! let bounds = vec![
//!     GeneBounds::new(0.0, 1.0).unwrap(),
//!     GeneBounds::new(0.0, 1.0).unwrap(),
//! ];
//! let codec = BinaryCodec::new(bounds, vec![8, 8]).unwrap();
//!
//! let chromosome = codec.encode(&[0.15, 0.85]).unwrap();
//! assert_eq!(chromosome.len(), 16);
//!
//! let decoded = codec.decode(&chromosome).unwrap();
//! assert!((decoded[0] - 0.15).abs() <= 1.0 / 255.0);
//! ```

use crate::error::{GeneticError, Result};
use crate::individual::BitString;

/// The inclusive lower and upper limit of one gene dimension.
///
/// Immutable for the duration of a run; the constructor rejects degenerate
/// pairs, so a held `GeneBounds` always satisfies `lower < upper`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneBounds {
    lower: f64,
    upper: f64,
}

impl GeneBounds {
    /// Creates a bound pair.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error unless both limits are finite and
    /// `lower < upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Gene bounds must be finite, got [{}, {}]",
                lower, upper
            )));
        }
        if lower >= upper {
            return Err(GeneticError::Configuration(format!(
                "Gene bounds must satisfy lower < upper, got [{}, {}]",
                lower, upper
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether `value` lies within the pair, both ends inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Bidirectional codec between bounded real vectors and fixed-width binary
/// chromosomes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryCodec {
    bounds: Vec<GeneBounds>,
    widths: Vec<u32>,
}

impl BinaryCodec {
    /// Creates a codec from per-gene bounds and bit widths.
    ///
    /// # Errors
    ///
    /// - `Configuration` if no genes are declared or any width is outside
    ///   `1..=64`.
    /// - `Length` if `bounds` and `widths` differ in length.
    pub fn new(bounds: Vec<GeneBounds>, widths: Vec<u32>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(GeneticError::Configuration(
                "Codec requires at least one gene dimension".to_string(),
            ));
        }
        if bounds.len() != widths.len() {
            return Err(GeneticError::Length(format!(
                "Bit width count ({}) doesn't match bound count ({})",
                widths.len(),
                bounds.len()
            )));
        }
        if let Some(&bad) = widths.iter().find(|&&w| w == 0 || w > 64) {
            return Err(GeneticError::Configuration(format!(
                "Bit widths must lie in 1..=64, got {}",
                bad
            )));
        }
        Ok(Self { bounds, widths })
    }

    pub fn bounds(&self) -> &[GeneBounds] {
        &self.bounds
    }

    pub fn gene_count(&self) -> usize {
        self.bounds.len()
    }

    /// Total chromosome length: the sum of the per-gene bit widths.
    pub fn total_bits(&self) -> usize {
        self.widths.iter().map(|&w| w as usize).sum()
    }

    /// The worst-case decode error for gene `j`: one quantization level,
    /// `span / (2^w - 1)`.
    pub fn quantization_step(&self, j: usize) -> f64 {
        self.bounds[j].span() / Self::levels(self.widths[j])
    }

    // Highest representable field value, 2^w - 1, exact for w <= 64.
    fn levels(width: u32) -> f64 {
        ((1u128 << width) - 1) as f64
    }

    /// Encodes a real-valued individual into its binary chromosome.
    ///
    /// Out-of-bound genes are rejected rather than silently clamped, so a
    /// caller feeding unclamped values finds out immediately.
    ///
    /// # Errors
    ///
    /// - `Length` if `genes` doesn't have one value per declared dimension.
    /// - `Domain` if any gene lies outside its bound pair.
    pub fn encode(&self, genes: &[f64]) -> Result<BitString> {
        if genes.len() != self.bounds.len() {
            return Err(GeneticError::Length(format!(
                "Individual has {} genes but codec declares {} dimensions",
                genes.len(),
                self.bounds.len()
            )));
        }

        let mut bits = Vec::with_capacity(self.total_bits());
        for (j, (&value, bound)) in genes.iter().zip(&self.bounds).enumerate() {
            if !bound.contains(value) {
                return Err(GeneticError::Domain(format!(
                    "Gene {} value {} outside bounds [{}, {}]",
                    j,
                    value,
                    bound.lower(),
                    bound.upper()
                )));
            }

            let width = self.widths[j];
            let scaled = (value - bound.lower()) / bound.span() * Self::levels(width);
            let field = scaled.round() as u128;
            for bit in (0..width).rev() {
                bits.push(field >> bit & 1 == 1);
            }
        }

        Ok(BitString::new(bits))
    }

    /// Decodes a binary chromosome back into a real-valued individual.
    ///
    /// # Errors
    ///
    /// Returns a `Length` error if the chromosome length differs from
    /// [`total_bits`](Self::total_bits).
    pub fn decode(&self, chromosome: &BitString) -> Result<Vec<f64>> {
        if chromosome.len() != self.total_bits() {
            return Err(GeneticError::Length(format!(
                "Chromosome has {} bits but codec declares {}",
                chromosome.len(),
                self.total_bits()
            )));
        }

        let bits = chromosome.bits();
        let mut genes = Vec::with_capacity(self.bounds.len());
        let mut start = 0;
        for (bound, &width) in self.bounds.iter().zip(&self.widths) {
            let field = bits[start..start + width as usize]
                .iter()
                .fold(0u128, |acc, &bit| acc << 1 | u128::from(bit));
            start += width as usize;

            genes.push(field as f64 * bound.span() / Self::levels(width) + bound.lower());
        }

        Ok(genes)
    }
}
