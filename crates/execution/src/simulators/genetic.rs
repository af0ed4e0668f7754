//! Genetic and neural-architecture search simulator.

use evocycle_core::{
    BestCandidate, Evolution, EvolutionReport, EvolutionaryStrategy, GenerationStat, PhaseDetails,
    PhaseId, ProducedArtifacts,
};
use rand::Rng;

use super::{mean, Simulation};

/// Run `strategy.generations` generations.
///
/// Each generation's fitness is a baseline rising linearly with the
/// generation index (clamped to 1.0) plus a random improvement bounded by
/// `improvement_range`.
pub fn simulate<R: Rng + ?Sized>(
    phase_id: &PhaseId,
    strategy: &EvolutionaryStrategy,
    rng: &mut R,
) -> Simulation {
    let range = strategy.improvement_range.max(0.0);
    let mut generations = Vec::with_capacity(strategy.generations as usize);
    let mut best = BestCandidate {
        subject: strategy.subject,
        generation: 0,
        fitness: 0.0,
    };

    for generation in 0..strategy.generations {
        let baseline = (strategy.baseline_fitness + strategy.baseline_step * f64::from(generation)).min(1.0);
        let fitness = (baseline + rng.gen_range(0.0..=range)).clamp(0.0, 1.0);

        if fitness > best.fitness {
            best.generation = generation;
            best.fitness = fitness;
        }
        generations.push(GenerationStat { generation, fitness });
    }

    let average_fitness = mean(generations.iter().map(|g| g.fitness)).unwrap_or(0.0);

    let produced = ProducedArtifacts {
        evolutions: vec![Evolution {
            phase_id: phase_id.clone(),
            strategy: strategy.name.clone(),
            generations: strategy.generations,
            best_fitness: best.fitness,
            average_fitness,
        }],
        ..Default::default()
    };

    Simulation {
        produced,
        details: PhaseDetails::Genetic(EvolutionReport {
            strategy: strategy.name.clone(),
            generations,
            best,
            average_fitness,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evocycle_core::EvolutionSubject;
    use evocycle_registry::{catalog, StrategyRegistries};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn report(sim: &Simulation) -> &EvolutionReport {
        match &sim.details {
            PhaseDetails::Genetic(report) => report,
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_capability_runs_ten_generations() {
        let registries = StrategyRegistries::configured();
        let strategy = registries.evolutionary(catalog::GENETIC_CAPABILITY).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        let sim = simulate(&PhaseId::ordinal(1), strategy, &mut rng);
        let report = report(&sim);

        assert_eq!(report.generations.len(), 10);
        assert_eq!(report.best.subject, EvolutionSubject::Individual);
        assert_eq!(sim.produced.evolutions.len(), 1);
        assert!(sim.produced.mutations.is_empty());
    }

    #[test]
    fn test_neural_runs_eight_generations_for_architecture() {
        let registries = StrategyRegistries::configured();
        let strategy = registries.evolutionary(catalog::NEURAL_ARCHITECTURE).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(2);

        let sim = simulate(&PhaseId::ordinal(2), strategy, &mut rng);
        let report = report(&sim);

        assert_eq!(report.generations.len(), 8);
        assert_eq!(report.best.subject, EvolutionSubject::Architecture);
    }

    #[test]
    fn test_fitness_bounds_and_best() {
        let registries = StrategyRegistries::configured();
        let strategy = registries.evolutionary(catalog::GENETIC_CAPABILITY).unwrap();

        for seed in 0..50 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let sim = simulate(&PhaseId::ordinal(1), strategy, &mut rng);
            let report = report(&sim);

            for (i, stat) in report.generations.iter().enumerate() {
                let baseline = (strategy.baseline_fitness + strategy.baseline_step * i as f64).min(1.0);
                assert!(stat.fitness >= baseline - 1e-12);
                assert!(stat.fitness <= 1.0);
            }

            let max = report.generations.iter().map(|g| g.fitness).fold(0.0, f64::max);
            assert_eq!(report.best.fitness, max);
            assert!(report.average_fitness <= report.best.fitness);
            assert_eq!(sim.produced.evolutions[0].best_fitness, report.best.fitness);
        }
    }

    #[test]
    fn test_zero_generations() {
        let registries = StrategyRegistries::configured();
        let mut strategy = registries.evolutionary(catalog::GENETIC_CAPABILITY).unwrap().clone();
        strategy.generations = 0;
        let mut rng = ChaCha20Rng::seed_from_u64(3);

        let sim = simulate(&PhaseId::ordinal(1), &strategy, &mut rng);
        assert!(report(&sim).generations.is_empty());
        assert_eq!(report(&sim).average_fitness, 0.0);
    }
}
