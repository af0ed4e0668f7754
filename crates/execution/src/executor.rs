//! Phase execution.

use evocycle_core::{PhaseDescriptor, PhaseResult};
use evocycle_registry::{RegistryError, StrategyRegistries};
use rand::Rng;
use tracing::debug;

use crate::dispatch::{DispatchTable, Route};
use crate::effectiveness;
use crate::simulators::{self, Simulation};

/// Errors that can occur while executing a phase.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecutionError {
    /// A route referenced a strategy missing from the registries
    #[error(transparent)]
    ConfigurationNotFound(#[from] RegistryError),

    /// A simulator produced an invalid result
    #[error("simulation fault in phase '{phase}': {message}")]
    Simulation {
        /// Phase name
        phase: String,
        /// What went wrong
        message: String,
    },
}

/// Inputs a phase reads besides its strategy config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseContext {
    /// Current consciousness level of the caller
    pub consciousness_level: f64,
}

impl Default for PhaseContext {
    fn default() -> Self {
        Self { consciousness_level: 1.0 }
    }
}

/// Executes phases by dispatching on the phase name.
#[derive(Debug, Clone)]
pub struct PhaseExecutor {
    dispatch: DispatchTable,
}

impl PhaseExecutor {
    /// Create an executor over a dispatch table.
    pub fn new(dispatch: DispatchTable) -> Self {
        Self { dispatch }
    }

    /// Create an executor over the standard dispatch table.
    pub fn standard() -> Self {
        Self::new(DispatchTable::standard())
    }

    /// The dispatch table in use.
    pub fn dispatch(&self) -> &DispatchTable {
        &self.dispatch
    }

    /// Run the simulator routed for `phase` and derive its effectiveness.
    ///
    /// Fails only when the route's strategy is not registered, or when the
    /// simulator produces a non-finite effectiveness.
    pub fn execute<R: Rng + ?Sized>(
        &self,
        phase: &PhaseDescriptor,
        context: &PhaseContext,
        registries: &StrategyRegistries,
        rng: &mut R,
    ) -> Result<PhaseResult, ExecutionError> {
        let route = self.dispatch.route(&phase.name);
        debug!(phase = %phase.name, simulator = route.simulator(), "Executing phase");

        let Simulation { produced, details } = match route {
            Route::Genetic { strategy } => {
                simulators::genetic::simulate(&phase.id, registries.evolutionary(strategy)?, rng)
            }
            Route::Quantum { operator } => {
                simulators::quantum::simulate(&phase.id, registries.mutation(operator)?, rng)
            }
            Route::Alchemical { process } => {
                simulators::alchemical::simulate(&phase.id, registries.transformation(process)?, rng)
            }
            Route::Terra { goal } => simulators::terra::simulate(
                &phase.id,
                registries.scale_goal(goal)?,
                context.consciousness_level,
                rng,
            ),
            Route::Consciousness { process } => simulators::consciousness::simulate(
                &phase.id,
                registries.transformation(process)?,
                context.consciousness_level,
                rng,
            ),
            Route::Generic => simulators::generic::simulate(&phase.id),
        };

        let effectiveness = effectiveness::derive(&details, rng);
        if !effectiveness.is_finite() {
            return Err(ExecutionError::Simulation {
                phase: phase.name.clone(),
                message: format!("non-finite effectiveness {}", effectiveness),
            });
        }

        Ok(PhaseResult {
            phase_name: phase.name.clone(),
            focus: phase.focus.clone(),
            produced,
            effectiveness,
            details,
        })
    }
}

impl Default for PhaseExecutor {
    fn default() -> Self {
        Self::standard()
    }
}
