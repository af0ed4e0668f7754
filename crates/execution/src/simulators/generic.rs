//! Generic fallback simulator.

use evocycle_core::{
    Adaptation, AdaptationKind, GenericReport, Improvement, PhaseDetails, PhaseId,
    ProducedArtifacts,
};

use super::Simulation;

/// Fixed improvement deltas. Their mean is the constant 0.75 effectiveness.
pub const IMPROVEMENTS: [(&str, f64); 3] = [
    ("performance", 0.80),
    ("efficiency", 0.70),
    ("capability", 0.75),
];

/// Report the fixed improvement deltas. Deterministic.
pub fn simulate(phase_id: &PhaseId) -> Simulation {
    let improvements: Vec<Improvement> = IMPROVEMENTS
        .iter()
        .map(|(name, improvement)| Improvement {
            name: name.to_string(),
            improvement: *improvement,
        })
        .collect();

    let adaptations = improvements
        .iter()
        .map(|i| Adaptation {
            phase_id: phase_id.clone(),
            kind: AdaptationKind::Improvement,
            label: i.name.clone(),
            magnitude: i.improvement,
        })
        .collect();

    Simulation {
        produced: ProducedArtifacts {
            adaptations,
            ..Default::default()
        },
        details: PhaseDetails::Generic(GenericReport { improvements }),
    }
}
