//! Cycle model - one top-to-bottom run of the orchestrator.

use serde::{Deserialize, Serialize};
use crate::id::CycleId;
use crate::phase::PhaseDescriptor;
use crate::result::{Adaptation, Evolution, Mutation, ProducedArtifacts, Transformation};
use crate::Time;

/// Known cycle types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleType {
    /// Four phases touching every strategy family
    #[default]
    Comprehensive,
    /// Three quantum phases
    QuantumFocused,
    /// Three consciousness phases
    ConsciousnessFocused,
    /// Three capability phases
    CapabilityFocused,
}

impl CycleType {
    /// All known cycle types.
    pub const ALL: [CycleType; 4] = [
        CycleType::Comprehensive,
        CycleType::QuantumFocused,
        CycleType::ConsciousnessFocused,
        CycleType::CapabilityFocused,
    ];

    /// Parse a cycle type name. Unknown names fall back to `Comprehensive`.
    pub fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Parse a cycle type name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "comprehensive" => Some(CycleType::Comprehensive),
            "quantum_focused" => Some(CycleType::QuantumFocused),
            "consciousness_focused" => Some(CycleType::ConsciousnessFocused),
            "capability_focused" => Some(CycleType::CapabilityFocused),
            _ => None,
        }
    }

    /// Stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleType::Comprehensive => "comprehensive",
            CycleType::QuantumFocused => "quantum_focused",
            CycleType::ConsciousnessFocused => "consciousness_focused",
            CycleType::CapabilityFocused => "capability_focused",
        }
    }
}

impl std::fmt::Display for CycleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    /// Phases are running
    Active,
    /// All phases finished and metrics computed
    Completed,
    /// A phase raised an error; the cycle was aborted
    Failed,
}

/// A cycle record: phases, accumulated artifacts and cycle-level metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Unique identifier
    pub id: CycleId,

    /// Cycle type the phases were generated for
    pub cycle_type: CycleType,

    /// Planned duration in seconds
    pub planned_duration_secs: f64,

    /// When the cycle started
    pub start_time: Time,

    /// When the cycle finished
    pub end_time: Option<Time>,

    /// Ordered phases
    pub phases: Vec<PhaseDescriptor>,

    /// All mutations produced by the phases
    pub mutations: Vec<Mutation>,

    /// All adaptations produced by the phases
    pub adaptations: Vec<Adaptation>,

    /// All transformations produced by the phases
    pub transformations: Vec<Transformation>,

    /// All evolutions produced by the phases
    pub evolutions: Vec<Evolution>,

    /// Fitness in [0, 1]
    pub fitness: f64,

    /// Complexity, at least 1.0 once completed
    pub complexity: f64,

    /// Consciousness in [0, 10]
    pub consciousness: f64,

    /// Cycle status
    pub status: CycleStatus,
}

impl CycleRecord {
    /// Allocate an active cycle with a fresh id and no phases.
    pub fn new(cycle_type: CycleType, planned_duration_secs: f64) -> Self {
        Self {
            id: CycleId::new(),
            cycle_type,
            planned_duration_secs,
            start_time: chrono::Utc::now(),
            end_time: None,
            phases: Vec::new(),
            mutations: Vec::new(),
            adaptations: Vec::new(),
            transformations: Vec::new(),
            evolutions: Vec::new(),
            fitness: 0.0,
            complexity: 0.0,
            consciousness: 0.0,
            status: CycleStatus::Active,
        }
    }

    /// Append a phase's artifacts onto the cycle collections.
    pub fn absorb(&mut self, produced: &ProducedArtifacts) {
        self.mutations.extend(produced.mutations.iter().cloned());
        self.adaptations.extend(produced.adaptations.iter().cloned());
        self.transformations.extend(produced.transformations.iter().cloned());
        self.evolutions.extend(produced.evolutions.iter().cloned());
    }

    /// Whether the cycle finished successfully.
    pub fn is_completed(&self) -> bool {
        self.status == CycleStatus::Completed
    }

    /// Mark the cycle completed with its final metrics.
    pub fn finalize(&mut self, fitness: f64, complexity: f64, consciousness: f64, at: Time) {
        self.fitness = fitness;
        self.complexity = complexity;
        self.consciousness = consciousness;
        self.end_time = Some(at);
        self.status = CycleStatus::Completed;
    }

    /// Mark the cycle failed.
    pub fn fail(&mut self, at: Time) {
        self.end_time = Some(at);
        self.status = CycleStatus::Failed;
    }
}
