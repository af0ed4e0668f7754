//! Cycle metrics and engine snapshots.

use evocycle_core::{CycleRecord, Mutation, PhaseDescriptor, Time, Transformation, MAX_CONSCIOUSNESS};
use evocycle_registry::RegistrySizes;
use evocycle_storage::RunningSummary;
use serde::{Deserialize, Serialize};

/// Transformation purity assumed when a cycle produced no transformations.
pub const DEFAULT_PURITY: f64 = 0.5;

/// Fitness in [0, 1].
///
/// `0.4 * mean phase effectiveness + 0.3 * mutation success rate + 0.3 * mean
/// transformation purity`. Phases without a result do not count toward the
/// mean; with no results at all the term is zero.
pub fn fitness(phases: &[PhaseDescriptor], mutations: &[Mutation], transformations: &[Transformation]) -> f64 {
    let effectiveness = mean(phases.iter().filter_map(PhaseDescriptor::effectiveness)).unwrap_or(0.0);

    let successful = mutations.iter().filter(|m| m.successful).count();
    let success_rate = successful as f64 / mutations.len().max(1) as f64;

    let purity = mean(transformations.iter().map(|t| t.purity)).unwrap_or(DEFAULT_PURITY);

    (0.4 * effectiveness + 0.3 * success_rate + 0.3 * purity).clamp(0.0, 1.0)
}

/// Complexity, at least 1.0 and unbounded above.
pub fn complexity(mutations: usize, transformations: usize, evolutions: usize) -> f64 {
    1.0 + 0.1 * mutations as f64 + 0.15 * transformations as f64 + 0.2 * evolutions as f64
}

/// Consciousness in [0, 10]: the base level plus 0.1 per consciousness-focused phase.
pub fn consciousness(base: f64, phases: &[PhaseDescriptor]) -> f64 {
    let focused = phases.iter().filter(|p| p.is_consciousness_focused()).count();
    (base + 0.1 * focused as f64).clamp(0.0, MAX_CONSCIOUSNESS)
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// The three cycle-level metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleMetrics {
    /// Fitness in [0, 1]
    pub fitness: f64,
    /// Complexity, at least 1.0
    pub complexity: f64,
    /// Consciousness in [0, 10]
    pub consciousness: f64,
}

impl CycleMetrics {
    /// Compute the metrics of a cycle from its phases and artifacts.
    pub fn compute(cycle: &CycleRecord, base_consciousness: f64) -> Self {
        Self {
            fitness: fitness(&cycle.phases, &cycle.mutations, &cycle.transformations),
            complexity: complexity(
                cycle.mutations.len(),
                cycle.transformations.len(),
                cycle.evolutions.len(),
            ),
            consciousness: consciousness(base_consciousness, &cycle.phases),
        }
    }
}

/// Point-in-time copy of the engine's counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Cycles recorded in history
    pub cycle_count: u64,
    /// Configs per registry
    pub registry_sizes: RegistrySizes,
    /// Totals and latest scores
    pub running_summary: RunningSummary,
    /// When the last cycle was recorded
    pub last_activity: Option<Time>,
}
