//! Phase results and the artifacts they produce.

use serde::{Deserialize, Serialize};
use crate::id::PhaseId;

/// Output of one phase simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResult {
    /// Name of the phase that produced this result
    pub phase_name: String,

    /// Focus label of the phase
    pub focus: String,

    /// Artifacts appended to the cycle collections
    pub produced: ProducedArtifacts,

    /// Outcome quality in [0, 1]
    pub effectiveness: f64,

    /// Simulator-specific report
    pub details: PhaseDetails,
}

/// Artifacts produced by a phase, one list per cycle collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProducedArtifacts {
    /// Mutation trials
    pub mutations: Vec<Mutation>,
    /// Adaptations (contributions, insights, improvements)
    pub adaptations: Vec<Adaptation>,
    /// Transmuted elements
    pub transformations: Vec<Transformation>,
    /// Evolutionary runs
    pub evolutions: Vec<Evolution>,
}

impl ProducedArtifacts {
    /// Total number of artifacts across all lists.
    pub fn len(&self) -> usize {
        self.mutations.len() + self.adaptations.len() + self.transformations.len() + self.evolutions.len()
    }

    /// Whether no artifact was produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One quantum mutation trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    /// Phase the trial belongs to
    pub phase_id: PhaseId,
    /// Operator used
    pub operator: String,
    /// Whether the trial succeeded
    pub successful: bool,
    /// Improvement, present only on success
    pub improvement: Option<QuantumImprovement>,
}

/// Improvement triple of a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantumImprovement {
    pub coherence: f64,
    pub stability: f64,
    pub entanglement_strength: f64,
}

/// Kind of an adaptation artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationKind {
    /// A planetary contribution
    Contribution,
    /// A healing session
    Healing,
    /// An integrated insight
    Insight,
    /// A generic improvement delta
    Improvement,
}

/// An adaptation artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adaptation {
    /// Phase the adaptation belongs to
    pub phase_id: PhaseId,
    /// What kind of adaptation
    pub kind: AdaptationKind,
    /// Label
    pub label: String,
    /// Magnitude (impact, effectiveness or delta depending on kind)
    pub magnitude: f64,
}

/// One transmuted element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    /// Phase the transformation belongs to
    pub phase_id: PhaseId,
    /// Process used
    pub process: String,
    /// Element transmuted
    pub element: String,
    /// Purity in [0, 1]
    pub purity: f64,
    /// Released energy
    pub energy: f64,
    /// Derived wisdom
    pub wisdom: f64,
}

/// Summary of one evolutionary run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    /// Phase the run belongs to
    pub phase_id: PhaseId,
    /// Strategy used
    pub strategy: String,
    /// Generations simulated
    pub generations: u32,
    /// Best fitness seen
    pub best_fitness: f64,
    /// Mean fitness over all generations
    pub average_fitness: f64,
}

/// Simulator-specific report attached to a phase result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "simulator", rename_all = "snake_case")]
pub enum PhaseDetails {
    Genetic(EvolutionReport),
    Quantum(QuantumReport),
    Alchemical(AlchemicalReport),
    Terra(TerraReport),
    Consciousness(ConsciousnessReport),
    Generic(GenericReport),
}

impl PhaseDetails {
    /// Improvement list, for simulators that report one.
    pub fn improvements(&self) -> Option<&[Improvement]> {
        match self {
            PhaseDetails::Generic(report) => Some(&report.improvements),
            _ => None,
        }
    }
}

/// Report of a genetic or neural-architecture run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionReport {
    pub strategy: String,
    pub generations: Vec<GenerationStat>,
    pub best: BestCandidate,
    pub average_fitness: f64,
}

/// Fitness reached in one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStat {
    pub generation: u32,
    pub fitness: f64,
}

/// Best individual or architecture of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestCandidate {
    /// Individual or architecture
    pub subject: crate::strategy::EvolutionSubject,
    /// Generation it appeared in
    pub generation: u32,
    /// Its fitness (performance, for architectures)
    pub fitness: f64,
}

/// Report of a quantum mutation batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumReport {
    pub operator: String,
    pub trials: u32,
    pub successes: u32,
    pub coherence_score: f64,
}

/// Report of an alchemical transmutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlchemicalReport {
    pub process: String,
    pub catalyst: String,
    pub essence: Essence,
}

/// Extracted essence: mean values over all transmuted elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Essence {
    pub purity: f64,
    pub energy: f64,
    pub wisdom: f64,
}

/// Report of a planetary healing phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerraReport {
    pub goal: String,
    pub contributions: Vec<Contribution>,
    pub healing: Healing,
    /// Consciousness level after the contributions, capped at 10
    pub consciousness_level: f64,
}

/// One planetary contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub label: String,
    pub consciousness_impact: f64,
}

/// One healing session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Healing {
    pub effectiveness: f64,
    pub participants: u64,
}

/// Report of a consciousness practice phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsciousnessReport {
    pub practices: Vec<PracticeOutcome>,
    pub insights: Vec<String>,
    /// Integrated level in [0, 10]
    pub level: f64,
    pub stability: f64,
}

/// Scores of one practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeOutcome {
    pub name: String,
    pub depth: f64,
    pub clarity: f64,
    pub expansion: f64,
}

/// Report of the generic fallback simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericReport {
    pub improvements: Vec<Improvement>,
}

/// A named improvement delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub name: String,
    pub improvement: f64,
}
