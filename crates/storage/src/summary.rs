//! Running summary of all recorded cycles.

use evocycle_core::CycleRecord;
use serde::{Deserialize, Serialize};

/// Totals and latest scores, updated additively after each cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunningSummary {
    /// Cycles recorded
    pub cycle_count: u64,
    /// Adaptations across all cycles
    pub total_adaptations: u64,
    /// Mutations across all cycles
    pub total_mutations: u64,
    /// Transformations across all cycles
    pub total_transformations: u64,
    /// Evolutions across all cycles
    pub total_evolutions: u64,
    /// Fitness of the latest cycle
    pub last_fitness: f64,
    /// Complexity of the latest cycle
    pub last_complexity: f64,
    /// Consciousness of the latest cycle
    pub last_consciousness: f64,
}

impl RunningSummary {
    /// Fold a finalized cycle into the summary.
    pub fn apply(&mut self, cycle: &CycleRecord) {
        self.cycle_count += 1;
        self.total_adaptations += cycle.adaptations.len() as u64;
        self.total_mutations += cycle.mutations.len() as u64;
        self.total_transformations += cycle.transformations.len() as u64;
        self.total_evolutions += cycle.evolutions.len() as u64;
        self.last_fitness = cycle.fitness;
        self.last_complexity = cycle.complexity;
        self.last_consciousness = cycle.consciousness;
    }
}
