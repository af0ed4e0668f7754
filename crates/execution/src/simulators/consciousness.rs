//! Consciousness practice simulator.

use evocycle_core::{
    Adaptation, AdaptationKind, ConsciousnessReport, PhaseDetails, PhaseId, PracticeOutcome,
    ProducedArtifacts, TransformationProcess, MAX_CONSCIOUSNESS,
};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{mean, Simulation};

/// Vocabulary insights are drawn from.
pub const INSIGHTS: [&str; 8] = [
    "interconnectedness",
    "impermanence",
    "compassion",
    "non_duality",
    "presence",
    "gratitude",
    "unity",
    "service",
];

/// Insights drawn per run.
pub const INSIGHTS_PER_RUN: usize = 3;

/// Run each practice of the process, draw insights, and integrate.
///
/// The integrated level is `current + sum(expansion) + 0.1 * insights`,
/// bounded to [0, 10]. Stability is the mean practice clarity.
pub fn simulate<R: Rng + ?Sized>(
    phase_id: &PhaseId,
    process: &TransformationProcess,
    consciousness_level: f64,
    rng: &mut R,
) -> Simulation {
    let practices: Vec<PracticeOutcome> = process
        .stages
        .iter()
        .map(|name| PracticeOutcome {
            name: name.clone(),
            depth: rng.gen_range(0.5..=1.0),
            clarity: rng.gen_range(0.5..=1.0),
            expansion: rng.gen_range(0.05..=0.2),
        })
        .collect();

    let insights: Vec<String> = INSIGHTS
        .choose_multiple(rng, INSIGHTS_PER_RUN)
        .map(|s| s.to_string())
        .collect();

    let expansion: f64 = practices.iter().map(|p| p.expansion).sum();
    let level = (consciousness_level + expansion + 0.1 * insights.len() as f64)
        .clamp(0.0, MAX_CONSCIOUSNESS);
    let stability = mean(practices.iter().map(|p| p.clarity)).unwrap_or(0.0);

    let adaptations = insights
        .iter()
        .map(|insight| Adaptation {
            phase_id: phase_id.clone(),
            kind: AdaptationKind::Insight,
            label: insight.clone(),
            magnitude: 0.1,
        })
        .collect();

    Simulation {
        produced: ProducedArtifacts {
            adaptations,
            ..Default::default()
        },
        details: PhaseDetails::Consciousness(ConsciousnessReport {
            practices,
            insights,
            level,
            stability,
        }),
    }
}
