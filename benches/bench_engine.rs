use criterion::{black_box, criterion_group, criterion_main, Criterion};

use allele::{
    encoding::GeneBounds,
    evolution::{EvolutionOptions, GeneticEngine, SelectionPolicy},
    individual::Individual,
    representation::Representation,
    rng::RandomNumberGenerator,
};

fn sphere_objective(individual: &Individual) -> f64 {
    let genes = individual.as_real().expect("real individual");
    10.0 - genes.iter().map(|x| x * x).sum::<f64>()
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_run");
    for size in [10, 100, 1000].iter() {
        group.bench_function(format!("real_run_pop_{}", size), |b| {
            let bounds = (0..5)
                .map(|_| GeneBounds::new(-5.0, 5.0).unwrap())
                .collect();
            let representation = Representation::real(bounds).unwrap();
            let options = EvolutionOptions::builder()
                .population_size(*size)
                .num_generations(20)
                .selection(SelectionPolicy::Tournament { size: 3 })
                .mutation_rate(0.05)
                .build();
            let engine = GeneticEngine::new(representation, options, sphere_objective).unwrap();

            b.iter(|| {
                let mut rng = RandomNumberGenerator::from_seed(42);
                let result = engine.run(black_box(&mut rng));
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
