//! Effectiveness derivation shared by every simulator.

use evocycle_core::PhaseDetails;
use rand::Rng;

use crate::simulators::mean;

/// Range of the baseline effectiveness drawn for reports without improvements.
pub const BASELINE_RANGE: std::ops::RangeInclusive<f64> = 0.7..=1.0;

/// Derive a phase's effectiveness from its report.
///
/// If the report carries a non-empty improvement list, effectiveness is the
/// mean improvement clamped to [0, 1]. Otherwise it is drawn uniformly from
/// [0.7, 1.0].
pub fn derive<R: Rng + ?Sized>(details: &PhaseDetails, rng: &mut R) -> f64 {
    match details.improvements().and_then(|list| mean(list.iter().map(|i| i.improvement))) {
        Some(avg) => avg.clamp(0.0, 1.0),
        None => rng.gen_range(BASELINE_RANGE),
    }
}
