//! Phase model - one ordered step of a cycle.

use serde::{Deserialize, Serialize};
use crate::id::PhaseId;
use crate::result::PhaseResult;
use crate::Time;

/// A phase is one step of a cycle, bound to a strategy simulator by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDescriptor {
    /// Position-derived identifier (`phase_1` ..)
    pub id: PhaseId,

    /// Phase name, used for simulator dispatch
    pub name: String,

    /// Planned duration in seconds
    pub planned_duration_secs: f64,

    /// Focus label
    pub focus: String,

    /// When the phase became active
    pub start_time: Option<Time>,

    /// When the phase completed
    pub end_time: Option<Time>,

    /// Phase status
    pub status: PhaseStatus,

    /// Simulation result, attached on completion
    pub result: Option<PhaseResult>,
}

/// Phase status. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStatus {
    Pending,
    Active,
    Completed,
}

impl PhaseDescriptor {
    /// Create a pending phase.
    pub fn new(
        id: PhaseId,
        name: impl Into<String>,
        planned_duration_secs: f64,
        focus: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            planned_duration_secs,
            focus: focus.into(),
            start_time: None,
            end_time: None,
            status: PhaseStatus::Pending,
            result: None,
        }
    }

    /// Move a pending phase to active and stamp its start time.
    ///
    /// Returns `false` (and changes nothing) if the phase is not pending.
    pub fn activate(&mut self, at: Time) -> bool {
        if self.status != PhaseStatus::Pending {
            return false;
        }
        self.status = PhaseStatus::Active;
        self.start_time = Some(at);
        true
    }

    /// Attach the result to an active phase and mark it completed.
    ///
    /// Returns `false` (and changes nothing) if the phase is not active.
    pub fn complete(&mut self, result: PhaseResult, at: Time) -> bool {
        if self.status != PhaseStatus::Active {
            return false;
        }
        self.status = PhaseStatus::Completed;
        self.end_time = Some(at);
        self.result = Some(result);
        true
    }

    /// Effectiveness of the attached result, if any.
    pub fn effectiveness(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.effectiveness)
    }

    /// Whether the focus label is consciousness- or awareness-oriented.
    pub fn is_consciousness_focused(&self) -> bool {
        self.focus.contains("consciousness") || self.focus.contains("awareness")
    }
}
