//! # Mutation
//!
//! The [`Mutator`] perturbs an offspring population according to the run's
//! representation:
//!
//! - **Binary**: one Bernoulli trial per individual; on trigger, exactly one
//!   uniformly chosen bit is flipped. This is the canonical policy — the
//!   mutation rate counts whole individuals, not bits.
//! - **Real**: an independent Bernoulli trial per gene; on trigger, the gene
//!   is resampled uniformly from its bound pair (full replacement, not a
//!   perturbation).
//! - **Index**: an independent Bernoulli trial per gene; on trigger, the
//!   gene is resampled uniformly from `[0, domain_size)`. Duplicate indices
//!   introduced this way are not repaired; only the initializer guarantees
//!   distinctness.

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::representation::Representation;
use crate::rng::RandomNumberGenerator;

/// Per-representation mutation operator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Mutator {
    mutation_rate: f64,
}

impl Mutator {
    /// Creates a mutator with the given trigger probability.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error unless the rate lies in `[0, 1]`.
    pub fn new(mutation_rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must lie in [0, 1], got {}",
                mutation_rate
            )));
        }
        Ok(Self { mutation_rate })
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Mutates a population in place of ownership: consumes the offspring
    /// and returns the next generation's population.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if an individual's variant does not
    /// match `representation`, or a `Length` error if a real individual's
    /// gene count does not match the declared bounds.
    pub fn mutate(
        &self,
        population: Vec<Individual>,
        representation: &Representation,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        population
            .into_iter()
            .map(|individual| self.mutate_one(individual, representation, rng))
            .collect()
    }

    fn mutate_one(
        &self,
        individual: Individual,
        representation: &Representation,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        match (individual, representation) {
            (Individual::Binary(mut bits), Representation::Binary { .. }) => {
                if !bits.is_empty() && rng.happens(self.mutation_rate) {
                    let locus = rng.below(bits.len());
                    bits.flip(locus);
                }
                Ok(Individual::Binary(bits))
            }
            (Individual::Real(mut genes), Representation::Real { bounds }) => {
                if genes.len() != bounds.len() {
                    return Err(GeneticError::Length(format!(
                        "Individual has {} genes but representation declares {}",
                        genes.len(),
                        bounds.len()
                    )));
                }
                for (gene, bound) in genes.iter_mut().zip(bounds) {
                    if rng.happens(self.mutation_rate) {
                        *gene = rng.uniform(bound.lower(), bound.upper());
                    }
                }
                Ok(Individual::Real(genes))
            }
            (Individual::Index(mut genes), Representation::Index { domain_size, .. }) => {
                for gene in genes.iter_mut() {
                    if rng.happens(self.mutation_rate) {
                        *gene = rng.below(*domain_size);
                    }
                }
                Ok(Individual::Index(genes))
            }
            (individual, _) => Err(GeneticError::Configuration(format!(
                "Cannot mutate a {} individual under this representation",
                individual.variant_name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{BinaryCodec, GeneBounds};

    fn unit_bounds(n: usize) -> Vec<GeneBounds> {
        (0..n).map(|_| GeneBounds::new(0.0, 1.0).unwrap()).collect()
    }

    #[test]
    fn test_binary_mutation_flips_exactly_one_bit() {
        let codec = BinaryCodec::new(unit_bounds(2), vec![8, 8]).unwrap();
        let representation = Representation::binary(codec);
        let mutator = Mutator::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..30 {
            let original = "0000000000000000".parse().unwrap();
            let population = vec![Individual::Binary(original)];
            let mutated = mutator
                .mutate(population, &representation, &mut rng)
                .unwrap();

            let ones = mutated[0]
                .as_binary()
                .unwrap()
                .bits()
                .iter()
                .filter(|&&b| b)
                .count();
            assert_eq!(ones, 1, "exactly one locus must flip per trigger");
        }
    }

    #[test]
    fn test_zero_rate_leaves_population_unchanged() {
        let representation = Representation::real(unit_bounds(4)).unwrap();
        let mutator = Mutator::new(0.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let population = vec![Individual::Real(vec![0.1, 0.2, 0.3, 0.4])];
        let mutated = mutator
            .mutate(population.clone(), &representation, &mut rng)
            .unwrap();
        assert_eq!(mutated, population);
    }

    #[test]
    fn test_real_mutation_resamples_within_bounds() {
        let bounds = vec![
            GeneBounds::new(0.0, 10.0).unwrap(),
            GeneBounds::new(5.0, 15.0).unwrap(),
        ];
        let representation = Representation::real(bounds.clone()).unwrap();
        let mutator = Mutator::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let population = vec![Individual::Real(vec![5.0, 10.0]); 20];
        let mutated = mutator
            .mutate(population, &representation, &mut rng)
            .unwrap();

        for individual in &mutated {
            for (gene, bound) in individual.as_real().unwrap().iter().zip(&bounds) {
                assert!(bound.contains(*gene));
            }
        }
    }

    #[test]
    fn test_real_mutation_rate_converges_statistically() {
        let rate = 0.1;
        let genes_per_individual = 50;
        let representation = Representation::real(unit_bounds(genes_per_individual)).unwrap();
        let mutator = Mutator::new(rate).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        // Start every gene at a marker outside [0, 1): any resample changes
        // it, so changed genes count triggered trials exactly.
        let marker = 2.0;

        let trials = 400;
        let mut mutated_genes = 0;
        for _ in 0..trials {
            let population = vec![Individual::Real(vec![marker; genes_per_individual])];
            let mutated = mutator
                .mutate(population, &representation, &mut rng)
                .unwrap();
            mutated_genes += mutated[0]
                .as_real()
                .unwrap()
                .iter()
                .filter(|&&g| g != marker)
                .count();
        }

        let fraction = mutated_genes as f64 / (trials * genes_per_individual) as f64;
        assert!(
            (fraction - rate).abs() < 0.02,
            "empirical mutation fraction was {}",
            fraction
        );
    }

    #[test]
    fn test_index_mutation_stays_in_domain_and_skips_repair() {
        let representation = Representation::index(10, 4).unwrap();
        let mutator = Mutator::new(1.0).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let mut saw_duplicate = false;
        for _ in 0..100 {
            let population = vec![Individual::Index(vec![0, 1, 2, 3])];
            let mutated = mutator
                .mutate(population, &representation, &mut rng)
                .unwrap();

            let genes = mutated[0].as_index().unwrap();
            assert!(genes.iter().all(|&g| g < 10));

            let mut sorted = genes.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            if sorted.len() < genes.len() {
                saw_duplicate = true;
            }
        }
        // The operator does not repair duplicates, and with full-rate
        // resampling from a domain of 10 they show up quickly.
        assert!(saw_duplicate);
    }

    #[test]
    fn test_representation_mismatch_is_rejected() {
        let representation = Representation::index(10, 4).unwrap();
        let mutator = Mutator::new(0.5).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let population = vec![Individual::Real(vec![0.5])];
        let result = mutator.mutate(population, &representation, &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_invalid_rate_is_rejected() {
        assert!(matches!(
            Mutator::new(1.01),
            Err(GeneticError::Configuration(_))
        ));
    }
}
