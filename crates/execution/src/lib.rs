//! Execution layer - phase templates, simulator dispatch, and phase execution.

#![warn(missing_docs)]

pub mod template;
pub mod dispatch;
pub mod effectiveness;
pub mod simulators;
pub mod executor;

pub use template::{generate_phases, generate_for, templates_for, all_phase_names, PhaseTemplate};
pub use dispatch::{DispatchTable, Route};
pub use executor::{PhaseExecutor, PhaseContext, ExecutionError};
