//! Engine events published to observers.

use serde::{Deserialize, Serialize};
use crate::cycle::{CycleRecord, CycleType};
use crate::id::CycleId;
use crate::phase::PhaseDescriptor;

/// An event emitted by the engine at a lifecycle transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// Registries were populated
    Initialized,

    /// A cycle was allocated and its phases generated
    CycleStarted {
        /// Cycle id
        cycle_id: CycleId,
        /// Cycle type
        cycle_type: CycleType,
        /// Number of phases planned
        phase_count: usize,
    },

    /// A phase became active
    PhaseStarted {
        /// Owning cycle
        cycle_id: CycleId,
        /// The phase, status active
        phase: Box<PhaseDescriptor>,
    },

    /// A phase finished
    PhaseCompleted {
        /// Owning cycle
        cycle_id: CycleId,
        /// The completed phase, result attached
        phase: Box<PhaseDescriptor>,
    },

    /// A cycle finished and was recorded
    CycleCompleted {
        /// The finalized cycle
        cycle: Box<CycleRecord>,
    },

    /// A cycle was aborted
    CycleFailed {
        /// The failed cycle
        cycle: Box<CycleRecord>,
        /// Error description
        error: String,
    },
}

impl EngineEvent {
    /// Event type name, as serialized in the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineEvent::Initialized => "initialized",
            EngineEvent::CycleStarted { .. } => "cycle_started",
            EngineEvent::PhaseStarted { .. } => "phase_started",
            EngineEvent::PhaseCompleted { .. } => "phase_completed",
            EngineEvent::CycleCompleted { .. } => "cycle_completed",
            EngineEvent::CycleFailed { .. } => "cycle_failed",
        }
    }
}
