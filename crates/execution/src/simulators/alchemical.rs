//! Alchemical transmutation simulator.

use evocycle_core::{
    AlchemicalReport, Essence, PhaseDetails, PhaseId, ProducedArtifacts, Transformation,
    TransformationProcess,
};
use evocycle_registry::catalog::PHILOSOPHERS_STONE;
use rand::Rng;

use super::{mean, Simulation};

/// Elements transmuted by every run, in order.
pub const ELEMENTS: [&str; 4] = ["fire", "water", "air", "earth"];

/// Purity bonus granted by a catalyst.
pub fn catalyst_bonus(catalyst: &str) -> f64 {
    if catalyst == PHILOSOPHERS_STONE {
        0.2
    } else {
        0.1
    }
}

/// Transmute each element and extract the mean essence.
pub fn simulate<R: Rng + ?Sized>(
    phase_id: &PhaseId,
    process: &TransformationProcess,
    rng: &mut R,
) -> Simulation {
    let bonus = catalyst_bonus(&process.catalyst);

    let transformations: Vec<Transformation> = ELEMENTS
        .iter()
        .map(|element| {
            let purity = (rng.gen_range(0.3..0.7) + bonus).min(1.0);
            let energy = purity * process.energy_factor;
            Transformation {
                phase_id: phase_id.clone(),
                process: process.name.clone(),
                element: element.to_string(),
                purity,
                energy,
                wisdom: (purity + energy) / 2.0,
            }
        })
        .collect();

    let essence = Essence {
        purity: mean(transformations.iter().map(|t| t.purity)).unwrap_or(0.0),
        energy: mean(transformations.iter().map(|t| t.energy)).unwrap_or(0.0),
        wisdom: mean(transformations.iter().map(|t| t.wisdom)).unwrap_or(0.0),
    };

    Simulation {
        produced: ProducedArtifacts {
            transformations,
            ..Default::default()
        },
        details: PhaseDetails::Alchemical(AlchemicalReport {
            process: process.name.clone(),
            catalyst: process.catalyst.clone(),
            essence,
        }),
    }
}
