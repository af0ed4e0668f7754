//! Strategy registries.
//!
//! Four independent name-keyed registries of immutable strategy configs,
//! populated once from a fixed catalog before any cycle runs.

#![warn(missing_docs)]

pub mod catalog;
pub mod registry;

pub use registry::{Registry, StrategyRegistries, RegistrySizes, RegistryError, Result};
