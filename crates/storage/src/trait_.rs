//! History store trait abstraction.

use async_trait::async_trait;
use evocycle_core::{CycleId, CycleRecord, CycleStatus, Time};

use crate::RunningSummary;

/// Error type for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;

/// Errors that can occur during history operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HistoryError {
    /// A cycle with the same id is already stored
    #[error("cycle already recorded: {0}")]
    Duplicate(CycleId),

    /// Only completed cycles may be stored
    #[error("cycle {id} is {status:?}, only completed cycles are recorded")]
    NotCompleted {
        /// Cycle id
        id: CycleId,
        /// Status it had
        status: CycleStatus,
    },
}

/// Permanent store of completed cycles.
///
/// Stored cycles are never mutated or removed.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Store a completed cycle and fold it into the running summary.
    async fn record(&mut self, cycle: CycleRecord) -> Result<()>;

    /// Load a cycle by id.
    async fn load_cycle(&self, id: &CycleId) -> Result<Option<CycleRecord>>;

    /// All cycles, in the order they were recorded.
    async fn list_cycles(&self) -> Result<Vec<CycleRecord>>;

    /// Number of stored cycles.
    async fn count(&self) -> Result<usize>;

    /// Copy of the running summary.
    async fn summary(&self) -> Result<RunningSummary>;

    /// When the last cycle was recorded.
    async fn last_activity(&self) -> Result<Option<Time>>;
}
