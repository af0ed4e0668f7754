//! Evocycle core data models.
//!
//! This crate defines the data structures shared by every layer of the
//! evolution cycle engine: strategy configurations, phase descriptors,
//! phase results with their artifacts, cycle records and engine events.

#![warn(missing_docs)]

// Identities
mod id;

// Strategy configuration
mod strategy;

// Cycle lifecycle
mod cycle;
mod phase;
mod result;
mod event;

// Re-exports
pub use id::*;

pub use strategy::{
    StrategyKind, StrategyConfig, SelectionPolicy, EvolutionSubject,
    EvolutionaryStrategy, MutationOperator, TransformationProcess, ScaleGoal,
};
pub use cycle::{CycleRecord, CycleStatus, CycleType};
pub use phase::{PhaseDescriptor, PhaseStatus};
pub use result::{
    PhaseResult, ProducedArtifacts, PhaseDetails,
    Mutation, QuantumImprovement, Adaptation, AdaptationKind, Transformation, Evolution,
    EvolutionReport, GenerationStat, BestCandidate,
    QuantumReport, AlchemicalReport, Essence,
    TerraReport, Contribution, Healing,
    ConsciousnessReport, PracticeOutcome,
    GenericReport, Improvement,
};
pub use event::EngineEvent;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Upper bound of every consciousness level in the system.
pub const MAX_CONSCIOUSNESS: f64 = 10.0;
