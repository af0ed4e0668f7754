//! Evolution layer - cycle orchestration, metrics, and engine events.
//!
//! [`EvolutionEngine`] drives a cycle end to end: it generates the phases for
//! the requested cycle type, executes them in order, accumulates their
//! artifacts, derives the cycle metrics and records the finished cycle in
//! history. Observers follow progress through [`EventBus`] subscriptions.

#![warn(missing_docs, unused_crate_dependencies)]

mod config;
mod engine;
mod events;
mod metrics;

pub use config::{EngineConfig, ConfigError};
pub use engine::{EvolutionEngine, EngineError, CycleRequest, InitStatus};
pub use events::EventBus;
pub use metrics::{CycleMetrics, MetricsSnapshot};

/// Cycle metric formulas.
pub mod formulas {
    pub use crate::metrics::{complexity, consciousness, fitness, DEFAULT_PURITY};
}
