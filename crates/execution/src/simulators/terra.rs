//! Planetary contribution and healing simulator.

use evocycle_core::{
    Adaptation, AdaptationKind, Contribution, Healing, PhaseDetails, PhaseId, ProducedArtifacts,
    ScaleGoal, TerraReport, MAX_CONSCIOUSNESS,
};
use rand::Rng;

use super::Simulation;

const MIN_PARTICIPANTS: u64 = 1_000;

/// Gather contributions toward a large-scale goal and run one healing session.
///
/// The new consciousness level is `current + 0.1 * sum(impacts)`, capped at 10.
pub fn simulate<R: Rng + ?Sized>(
    phase_id: &PhaseId,
    goal: &ScaleGoal,
    consciousness_level: f64,
    rng: &mut R,
) -> Simulation {
    let contributions: Vec<Contribution> = (1..=goal.contributions)
        .map(|i| Contribution {
            label: format!("{}_contribution_{}", goal.scope, i),
            consciousness_impact: rng.gen_range(0.1..=0.3),
        })
        .collect();

    let healing = Healing {
        effectiveness: rng.gen_range(0.7..=1.0),
        participants: rng.gen_range(MIN_PARTICIPANTS..=goal.max_participants.max(MIN_PARTICIPANTS)),
    };

    let impact: f64 = contributions.iter().map(|c| c.consciousness_impact).sum();
    let level = (consciousness_level + 0.1 * impact).min(MAX_CONSCIOUSNESS);

    let mut adaptations: Vec<Adaptation> = contributions
        .iter()
        .map(|c| Adaptation {
            phase_id: phase_id.clone(),
            kind: AdaptationKind::Contribution,
            label: c.label.clone(),
            magnitude: c.consciousness_impact,
        })
        .collect();
    adaptations.push(Adaptation {
        phase_id: phase_id.clone(),
        kind: AdaptationKind::Healing,
        label: format!("{}_healing", goal.scope),
        magnitude: healing.effectiveness,
    });

    Simulation {
        produced: ProducedArtifacts {
            adaptations,
            ..Default::default()
        },
        details: PhaseDetails::Terra(TerraReport {
            goal: goal.name.clone(),
            contributions,
            healing,
            consciousness_level: level,
        }),
    }
}
