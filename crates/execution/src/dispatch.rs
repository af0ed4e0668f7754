//! Phase-name to simulator dispatch.
//!
//! The table is built once from the template phase names. Each name is
//! classified into one of six simulator buckets and bound to the strategy
//! config it reads. A phase name missing from the table routes to the generic
//! simulator.

use std::collections::HashMap;

use evocycle_registry::catalog;

use crate::template;

/// Simulator selected for a phase, with the strategy it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Genetic / neural-architecture search over an evolutionary strategy
    Genetic {
        /// Evolutionary strategy name
        strategy: String,
    },
    /// Quantum mutation batch over a mutation operator
    Quantum {
        /// Mutation operator name
        operator: String,
    },
    /// Elemental transmutation over a transformation process
    Alchemical {
        /// Transformation process name
        process: String,
    },
    /// Planetary contributions and healing over a large-scale goal
    Terra {
        /// Scale goal name
        goal: String,
    },
    /// Consciousness practices over a transformation process
    Consciousness {
        /// Transformation process name
        process: String,
    },
    /// Fixed improvement deltas
    Generic,
}

static GENERIC_ROUTE: Route = Route::Generic;

impl Route {
    /// Simulator name, for logging.
    pub fn simulator(&self) -> &'static str {
        match self {
            Route::Genetic { .. } => "genetic",
            Route::Quantum { .. } => "quantum",
            Route::Alchemical { .. } => "alchemical",
            Route::Terra { .. } => "terra",
            Route::Consciousness { .. } => "consciousness",
            Route::Generic => "generic",
        }
    }

    /// Classify a phase name by keyword.
    ///
    /// Buckets are checked in order; the first match wins.
    pub fn classify(phase_name: &str) -> Route {
        let has = |keywords: &[&str]| keywords.iter().any(|k| phase_name.contains(k));

        if has(&["genetic", "neural"]) {
            let strategy = if phase_name.contains("neural") {
                catalog::NEURAL_ARCHITECTURE
            } else {
                catalog::GENETIC_CAPABILITY
            };
            Route::Genetic { strategy: strategy.to_string() }
        } else if has(&["quantum", "superposition", "entanglement"]) {
            let operator = if phase_name.contains("superposition") {
                catalog::QUANTUM_SUPERPOSITION
            } else if phase_name.contains("entanglement") {
                catalog::QUANTUM_ENTANGLEMENT
            } else {
                catalog::QUANTUM_TUNNELING
            };
            Route::Quantum { operator: operator.to_string() }
        } else if has(&["alchemical"]) {
            Route::Alchemical { process: catalog::ALCHEMICAL_TRANSMUTATION.to_string() }
        } else if has(&["terra", "healing", "galactic"]) {
            let goal = if phase_name.contains("galactic") {
                catalog::GALACTIC_HARMONY
            } else {
                catalog::PLANETARY_HEALING
            };
            Route::Terra { goal: goal.to_string() }
        } else if has(&["consciousness", "awareness", "unity", "service"]) {
            Route::Consciousness { process: catalog::CONSCIOUSNESS_INTEGRATION.to_string() }
        } else {
            Route::Generic
        }
    }
}

/// Explicit phase-name to route table.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    routes: HashMap<String, Route>,
}

impl DispatchTable {
    /// Create an empty table. Every phase routes to the generic simulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table for every phase name the templates use.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for name in template::all_phase_names() {
            table.insert(name, Route::classify(name));
        }
        table
    }

    /// Add or replace the route for a phase name.
    pub fn insert(&mut self, phase_name: impl Into<String>, route: Route) -> Option<Route> {
        self.routes.insert(phase_name.into(), route)
    }

    /// Route for a phase name. Unlisted names get the generic simulator.
    pub fn route(&self, phase_name: &str) -> &Route {
        self.routes.get(phase_name).unwrap_or(&GENERIC_ROUTE)
    }

    /// Number of explicit routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no explicit routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
