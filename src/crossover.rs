//! # Recombination
//!
//! The [`Recombinator`] produces offspring from a selected set by walking it
//! pairwise in order. Binary and index chromosomes recombine by single-point
//! crossover (cut uniform in `[1, len-1]`, suffixes swapped), gated per pair
//! by the crossover rate. Real chromosomes recombine by arithmetic blending
//! with one `alpha` per pair; whether that blend honors the rate gate is
//! configurable and ungated by default.
//!
//! Output length always equals input length: pass-through pairs are cloned
//! unchanged, and a trailing unpaired individual passes through as-is.

use crate::error::{GeneticError, Result};
use crate::individual::{BitString, Individual};
use crate::rng::RandomNumberGenerator;

/// Pairwise crossover operator over a selected set.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Recombinator {
    crossover_rate: f64,
    gate_arithmetic: bool,
}

impl Recombinator {
    /// Creates a recombinator with the given per-pair crossover rate.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error unless the rate lies in `[0, 1]`.
    pub fn new(crossover_rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&crossover_rate) {
            return Err(GeneticError::Configuration(format!(
                "Crossover rate must lie in [0, 1], got {}",
                crossover_rate
            )));
        }
        Ok(Self {
            crossover_rate,
            gate_arithmetic: false,
        })
    }

    /// Applies the crossover-rate gate to arithmetic (real-vector) pairs as
    /// well. By default arithmetic crossover blends every pair.
    pub fn with_gated_arithmetic(mut self) -> Self {
        self.gate_arithmetic = true;
        self
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// Recombines the selected set into an offspring set of the same length.
    ///
    /// # Errors
    ///
    /// - `Configuration` if a pair mixes representations.
    /// - `Length` if two paired chromosomes differ in length.
    pub fn recombine(
        &self,
        selected: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let mut offspring = Vec::with_capacity(selected.len());

        let mut pairs = selected.chunks_exact(2);
        for pair in &mut pairs {
            let (child_a, child_b) = self.cross_pair(&pair[0], &pair[1], rng)?;
            offspring.push(child_a);
            offspring.push(child_b);
        }
        // Odd-sized set: the unpaired individual passes through unchanged.
        if let [last] = pairs.remainder() {
            offspring.push(last.clone());
        }

        Ok(offspring)
    }

    fn cross_pair(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        check_pair(parent1, parent2)?;

        match (parent1, parent2) {
            (Individual::Binary(p1), Individual::Binary(p2)) => {
                if p1.len() < 2 || !rng.happens(self.crossover_rate) {
                    return Ok((parent1.clone(), parent2.clone()));
                }
                let cut = 1 + rng.below(p1.len() - 1);
                let (a, b) = splice(p1.bits(), p2.bits(), cut);
                Ok((
                    Individual::Binary(BitString::new(a)),
                    Individual::Binary(BitString::new(b)),
                ))
            }
            (Individual::Index(p1), Individual::Index(p2)) => {
                if p1.len() < 2 || !rng.happens(self.crossover_rate) {
                    return Ok((parent1.clone(), parent2.clone()));
                }
                let cut = 1 + rng.below(p1.len() - 1);
                let (a, b) = splice(p1, p2, cut);
                Ok((Individual::Index(a), Individual::Index(b)))
            }
            (Individual::Real(p1), Individual::Real(p2)) => {
                if self.gate_arithmetic && !rng.happens(self.crossover_rate) {
                    return Ok((parent1.clone(), parent2.clone()));
                }
                let alpha = rng.uniform_inclusive(0.0, 1.0);
                let blend = |x: &[f64], y: &[f64]| -> Vec<f64> {
                    x.iter()
                        .zip(y)
                        .map(|(&a, &b)| alpha * a + (1.0 - alpha) * b)
                        .collect()
                };
                Ok((
                    Individual::Real(blend(p1, p2)),
                    Individual::Real(blend(p2, p1)),
                ))
            }
            // check_pair already rejected mixed variants
            _ => unreachable!("mixed-representation pair slipped past validation"),
        }
    }
}

fn check_pair(parent1: &Individual, parent2: &Individual) -> Result<()> {
    if std::mem::discriminant(parent1) != std::mem::discriminant(parent2) {
        return Err(GeneticError::Configuration(format!(
            "Cannot recombine a {} individual with a {} individual",
            parent1.variant_name(),
            parent2.variant_name()
        )));
    }
    if parent1.len() != parent2.len() {
        return Err(GeneticError::Length(format!(
            "Paired parents differ in length ({} vs {})",
            parent1.len(),
            parent2.len()
        )));
    }
    Ok(())
}

/// Child A = prefix of `p1` + suffix of `p2`; child B mirrored.
fn splice<T: Clone>(p1: &[T], p2: &[T], cut: usize) -> (Vec<T>, Vec<T>) {
    let mut a = p1[..cut].to_vec();
    a.extend_from_slice(&p2[cut..]);
    let mut b = p2[..cut].to_vec();
    b.extend_from_slice(&p1[cut..]);
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(s: &str) -> Individual {
        Individual::Binary(s.parse().unwrap())
    }

    #[test]
    fn test_output_length_matches_even_input() {
        let selected = vec![
            binary("0000"),
            binary("1111"),
            binary("0101"),
            binary("1010"),
        ];
        let recombinator = Recombinator::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let offspring = recombinator.recombine(&selected, &mut rng).unwrap();
        assert_eq!(offspring.len(), selected.len());
    }

    #[test]
    fn test_odd_trailing_individual_passes_through() {
        let selected = vec![binary("0000"), binary("1111"), binary("0110")];
        let recombinator = Recombinator::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let offspring = recombinator.recombine(&selected, &mut rng).unwrap();
        assert_eq!(offspring.len(), 3);
        assert_eq!(offspring[2], selected[2]);
    }

    #[test]
    fn test_single_point_children_are_splices() {
        let selected = vec![binary("00000000"), binary("11111111")];
        let recombinator = Recombinator::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..50 {
            let offspring = recombinator.recombine(&selected, &mut rng).unwrap();
            let a = offspring[0].as_binary().unwrap().to_string();
            let b = offspring[1].as_binary().unwrap().to_string();

            // Child A is zeros then ones with a cut in [1, len-1]; child B
            // is the mirror image.
            let cut = a.chars().take_while(|&c| c == '0').count();
            assert!((1..8).contains(&cut), "cut point was {}", cut);
            assert_eq!(a, format!("{}{}", "0".repeat(cut), "1".repeat(8 - cut)));
            assert_eq!(b, format!("{}{}", "1".repeat(cut), "0".repeat(8 - cut)));
        }
    }

    #[test]
    fn test_zero_rate_passes_parents_through() {
        let selected = vec![binary("0011"), binary("1100")];
        let recombinator = Recombinator::new(0.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let offspring = recombinator.recombine(&selected, &mut rng).unwrap();
        assert_eq!(offspring, selected);
    }

    #[test]
    fn test_index_single_point_crossover() {
        let selected = vec![
            Individual::Index(vec![0, 1, 2, 3]),
            Individual::Index(vec![10, 11, 12, 13]),
        ];
        let recombinator = Recombinator::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let offspring = recombinator.recombine(&selected, &mut rng).unwrap();
        let a = offspring[0].as_index().unwrap();
        let b = offspring[1].as_index().unwrap();

        let cut = a.iter().take_while(|&&g| g < 10).count();
        assert!((1..4).contains(&cut));
        assert_eq!(&a[..cut], &[0, 1, 2, 3][..cut]);
        assert_eq!(&a[cut..], &[10, 11, 12, 13][cut..]);
        assert_eq!(&b[..cut], &[10, 11, 12, 13][..cut]);
        assert_eq!(&b[cut..], &[0, 1, 2, 3][cut..]);
    }

    #[test]
    fn test_arithmetic_children_are_mirrored_blends() {
        let p1 = vec![1.0, 4.0, -2.0];
        let p2 = vec![3.0, 0.0, 2.0];
        let selected = vec![Individual::Real(p1.clone()), Individual::Real(p2.clone())];
        let recombinator = Recombinator::new(0.6).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let offspring = recombinator.recombine(&selected, &mut rng).unwrap();
        let a = offspring[0].as_real().unwrap();
        let b = offspring[1].as_real().unwrap();

        for j in 0..3 {
            // Mirrored blends preserve the per-gene sum and stay within the
            // parents' hull.
            assert!((a[j] + b[j] - (p1[j] + p2[j])).abs() < 1e-12);
            let (lo, hi) = (p1[j].min(p2[j]), p1[j].max(p2[j]));
            assert!(a[j] >= lo - 1e-12 && a[j] <= hi + 1e-12);
        }
    }

    #[test]
    fn test_arithmetic_gate_honors_zero_rate() {
        let selected = vec![
            Individual::Real(vec![1.0, 2.0]),
            Individual::Real(vec![3.0, 4.0]),
        ];
        let mut rng = RandomNumberGenerator::from_seed(42);

        // Ungated by default: parents always blend.
        let ungated = Recombinator::new(0.0).unwrap();
        let blended = ungated.recombine(&selected, &mut rng).unwrap();
        assert_ne!(blended, selected);

        // Gated with rate zero: parents pass through.
        let gated = Recombinator::new(0.0).unwrap().with_gated_arithmetic();
        let passed = gated.recombine(&selected, &mut rng).unwrap();
        assert_eq!(passed, selected);
    }

    #[test]
    fn test_mixed_representation_pair_is_rejected() {
        let selected = vec![binary("0011"), Individual::Real(vec![0.0, 1.0, 1.0, 0.0])];
        let recombinator = Recombinator::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = recombinator.recombine(&selected, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_mismatched_pair_lengths_are_rejected() {
        let selected = vec![binary("0011"), binary("001100")];
        let recombinator = Recombinator::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = recombinator.recombine(&selected, &mut rng);
        assert!(matches!(result, Err(GeneticError::Length(_))));
    }

    #[test]
    fn test_invalid_rate_is_rejected() {
        assert!(matches!(
            Recombinator::new(1.5),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            Recombinator::new(-0.1),
            Err(GeneticError::Configuration(_))
        ));
    }
}
