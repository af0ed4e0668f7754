//! Quantum mutation simulator.

use evocycle_core::{
    Mutation, MutationOperator, PhaseDetails, PhaseId, ProducedArtifacts, QuantumImprovement,
    QuantumReport,
};
use rand::Rng;

use super::{positive_up_to, Simulation};

/// Run one batch of `operator.trials` independent Bernoulli trials.
///
/// A successful trial carries a small positive improvement triple; a failed
/// one carries none. The coherence score is nudged up once per batch and
/// capped at 1.0.
pub fn simulate<R: Rng + ?Sized>(
    phase_id: &PhaseId,
    operator: &MutationOperator,
    rng: &mut R,
) -> Simulation {
    let probability = operator.probability.clamp(0.0, 1.0);
    let mut mutations = Vec::with_capacity(operator.trials as usize);
    let mut successes = 0;

    for _ in 0..operator.trials {
        let successful = rng.gen_bool(probability);
        let improvement = successful.then(|| QuantumImprovement {
            coherence: positive_up_to(rng, operator.max_improvement),
            stability: positive_up_to(rng, operator.max_improvement),
            entanglement_strength: positive_up_to(rng, operator.max_improvement),
        });
        if successful {
            successes += 1;
        }

        mutations.push(Mutation {
            phase_id: phase_id.clone(),
            operator: operator.name.clone(),
            successful,
            improvement,
        });
    }

    let coherence_score = (operator.coherence_baseline + operator.coherence_increment).min(1.0);

    Simulation {
        produced: ProducedArtifacts {
            mutations,
            ..Default::default()
        },
        details: PhaseDetails::Quantum(QuantumReport {
            operator: operator.name.clone(),
            trials: operator.trials,
            successes,
            coherence_score,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evocycle_registry::{catalog, StrategyRegistries};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn operator(name: &str) -> MutationOperator {
        StrategyRegistries::configured().mutation(name).unwrap().clone()
    }

    #[test]
    fn test_batch_has_five_trials() {
        let op = operator(catalog::QUANTUM_TUNNELING);
        let mut rng = ChaCha20Rng::seed_from_u64(11);

        let sim = simulate(&PhaseId::ordinal(2), &op, &mut rng);
        assert_eq!(sim.produced.mutations.len(), 5);

        let PhaseDetails::Quantum(report) = &sim.details else {
            panic!("expected quantum report");
        };
        let counted = sim.produced.mutations.iter().filter(|m| m.successful).count() as u32;
        assert_eq!(report.successes, counted);
    }

    #[test]
    fn test_improvement_only_on_success() {
        let op = operator(catalog::QUANTUM_SUPERPOSITION);
        for seed in 0..50 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let sim = simulate(&PhaseId::ordinal(1), &op, &mut rng);
            for m in &sim.produced.mutations {
                match (&m.improvement, m.successful) {
                    (Some(i), true) => {
                        assert!(i.coherence > 0.0 && i.coherence <= op.max_improvement);
                        assert!(i.stability > 0.0 && i.stability <= op.max_improvement);
                        assert!(i.entanglement_strength > 0.0);
                    }
                    (None, false) => {}
                    other => panic!("inconsistent mutation: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_certain_and_impossible_probabilities() {
        let mut op = operator(catalog::QUANTUM_ENTANGLEMENT);
        let mut rng = ChaCha20Rng::seed_from_u64(5);

        op.probability = 1.0;
        let sim = simulate(&PhaseId::ordinal(1), &op, &mut rng);
        assert!(sim.produced.mutations.iter().all(|m| m.successful));

        op.probability = 0.0;
        let sim = simulate(&PhaseId::ordinal(1), &op, &mut rng);
        assert!(sim.produced.mutations.iter().all(|m| !m.successful));
    }

    #[test]
    fn test_coherence_capped() {
        let mut op = operator(catalog::QUANTUM_TUNNELING);
        op.coherence_baseline = 0.99;
        let mut rng = ChaCha20Rng::seed_from_u64(5);

        let sim = simulate(&PhaseId::ordinal(1), &op, &mut rng);
        let PhaseDetails::Quantum(report) = sim.details else {
            panic!("expected quantum report");
        };
        assert_eq!(report.coherence_score, 1.0);
    }
}
