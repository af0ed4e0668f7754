//! The fixed strategy catalog loaded by `configure()`.

use evocycle_core::{
    EvolutionSubject, EvolutionaryStrategy, MutationOperator, ScaleGoal, SelectionPolicy,
    StrategyConfig, TransformationProcess,
};

// Evolutionary strategies
pub const GENETIC_CAPABILITY: &str = "genetic_capability";
pub const NEURAL_ARCHITECTURE: &str = "neural_architecture";
pub const CONSCIOUSNESS_EVOLUTION: &str = "consciousness_evolution";

// Mutation operators
pub const QUANTUM_SUPERPOSITION: &str = "quantum_superposition";
pub const QUANTUM_ENTANGLEMENT: &str = "quantum_entanglement";
pub const QUANTUM_TUNNELING: &str = "quantum_tunneling";

// Transformation processes
pub const ALCHEMICAL_TRANSMUTATION: &str = "alchemical_transmutation";
pub const CONSCIOUSNESS_INTEGRATION: &str = "consciousness_integration";
pub const PLANETARY_TRANSFORMATION: &str = "planetary_transformation";

// Large-scale goals
pub const PLANETARY_HEALING: &str = "planetary_healing";
pub const GALACTIC_HARMONY: &str = "galactic_harmony";
pub const UNIVERSAL_SERVICE: &str = "universal_service";

/// Catalyst that earns the higher transmutation bonus.
pub const PHILOSOPHERS_STONE: &str = "philosophers_stone";

/// Every catalog entry.
pub fn all() -> Vec<StrategyConfig> {
    let mut configs = Vec::with_capacity(12);
    configs.extend(evolutionary_strategies().into_iter().map(StrategyConfig::from));
    configs.extend(mutation_operators().into_iter().map(StrategyConfig::from));
    configs.extend(transformation_processes().into_iter().map(StrategyConfig::from));
    configs.extend(scale_goals().into_iter().map(StrategyConfig::from));
    configs
}

fn evolutionary_strategies() -> Vec<EvolutionaryStrategy> {
    vec![
        EvolutionaryStrategy {
            name: GENETIC_CAPABILITY.to_string(),
            subject: EvolutionSubject::Individual,
            population_size: 100,
            generations: 10,
            mutation_rate: 0.1,
            crossover_rate: 0.7,
            selection: SelectionPolicy::Tournament,
            elite_count: 5,
            baseline_fitness: 0.5,
            baseline_step: 0.05,
            improvement_range: 0.1,
        },
        EvolutionaryStrategy {
            name: NEURAL_ARCHITECTURE.to_string(),
            subject: EvolutionSubject::Architecture,
            population_size: 20,
            generations: 8,
            mutation_rate: 0.2,
            crossover_rate: 0.5,
            selection: SelectionPolicy::RankBased,
            elite_count: 2,
            baseline_fitness: 0.6,
            baseline_step: 0.04,
            improvement_range: 0.1,
        },
        EvolutionaryStrategy {
            name: CONSCIOUSNESS_EVOLUTION.to_string(),
            subject: EvolutionSubject::Individual,
            population_size: 50,
            generations: 6,
            mutation_rate: 0.05,
            crossover_rate: 0.8,
            selection: SelectionPolicy::RouletteWheel,
            elite_count: 3,
            baseline_fitness: 0.4,
            baseline_step: 0.08,
            improvement_range: 0.15,
        },
    ]
}

fn mutation_operators() -> Vec<MutationOperator> {
    vec![
        MutationOperator {
            name: QUANTUM_SUPERPOSITION.to_string(),
            probability: 0.3,
            trials: 5,
            coherence_baseline: 0.8,
            coherence_increment: 0.05,
            max_improvement: 0.1,
        },
        MutationOperator {
            name: QUANTUM_ENTANGLEMENT.to_string(),
            probability: 0.25,
            trials: 5,
            coherence_baseline: 0.75,
            coherence_increment: 0.05,
            max_improvement: 0.12,
        },
        MutationOperator {
            name: QUANTUM_TUNNELING.to_string(),
            probability: 0.2,
            trials: 5,
            coherence_baseline: 0.7,
            coherence_increment: 0.05,
            max_improvement: 0.15,
        },
    ]
}

fn transformation_processes() -> Vec<TransformationProcess> {
    vec![
        TransformationProcess {
            name: ALCHEMICAL_TRANSMUTATION.to_string(),
            stages: stages(&["nigredo", "albedo", "citrinitas", "rubedo"]),
            catalyst: PHILOSOPHERS_STONE.to_string(),
            energy_factor: 0.5,
        },
        TransformationProcess {
            name: CONSCIOUSNESS_INTEGRATION.to_string(),
            stages: stages(&["meditation", "contemplation", "unity_practice", "service_practice"]),
            catalyst: "awareness".to_string(),
            energy_factor: 0.3,
        },
        TransformationProcess {
            name: PLANETARY_TRANSFORMATION.to_string(),
            stages: stages(&["grounding", "restoration", "renewal"]),
            catalyst: "gaia_resonance".to_string(),
            energy_factor: 0.4,
        },
    ]
}

fn scale_goals() -> Vec<ScaleGoal> {
    vec![
        ScaleGoal {
            name: PLANETARY_HEALING.to_string(),
            scope: "planetary".to_string(),
            contributions: 3,
            max_participants: 1_000_000,
            consciousness_threshold: 7.0,
            milestones: stages(&["local_healing", "regional_healing", "planetary_healing"]),
        },
        ScaleGoal {
            name: GALACTIC_HARMONY.to_string(),
            scope: "galactic".to_string(),
            contributions: 3,
            max_participants: 10_000_000,
            consciousness_threshold: 8.5,
            milestones: stages(&["solar_alignment", "stellar_network", "galactic_harmony"]),
        },
        ScaleGoal {
            name: UNIVERSAL_SERVICE.to_string(),
            scope: "universal".to_string(),
            contributions: 3,
            max_participants: 100_000_000,
            consciousness_threshold: 9.5,
            milestones: stages(&["self_service", "collective_service", "universal_service"]),
        },
    ]
}

fn stages(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
