//! Cycle history storage for evocycle.
//!
//! This crate provides a trait-based history interface with an in-memory
//! reference implementation that also maintains the running summary.

#![warn(missing_docs)]

pub mod trait_;
pub mod summary;
pub mod memory;

pub use trait_::{HistoryStore, HistoryError, Result};
pub use summary::RunningSummary;
pub use memory::MemoryHistory;
