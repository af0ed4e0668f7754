//! In-memory history store.

use std::collections::HashMap;

use async_trait::async_trait;
use evocycle_core::{CycleId, CycleRecord, Time};
use tracing::debug;

use super::{HistoryError, HistoryStore, Result, RunningSummary};

/// History held in process memory. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    cycles: HashMap<CycleId, CycleRecord>,
    order: Vec<CycleId>,
    summary: RunningSummary,
    last_activity: Option<Time>,
}

impl MemoryHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn record(&mut self, cycle: CycleRecord) -> Result<()> {
        if !cycle.is_completed() {
            return Err(HistoryError::NotCompleted {
                id: cycle.id,
                status: cycle.status,
            });
        }
        if self.cycles.contains_key(&cycle.id) {
            return Err(HistoryError::Duplicate(cycle.id));
        }

        self.summary.apply(&cycle);
        self.last_activity = Some(cycle.end_time.unwrap_or_else(chrono::Utc::now));
        self.order.push(cycle.id.clone());
        debug!(cycle_id = %cycle.id, total = self.order.len(), "Cycle recorded");
        self.cycles.insert(cycle.id.clone(), cycle);
        Ok(())
    }

    async fn load_cycle(&self, id: &CycleId) -> Result<Option<CycleRecord>> {
        Ok(self.cycles.get(id).cloned())
    }

    async fn list_cycles(&self) -> Result<Vec<CycleRecord>> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.cycles.get(id).cloned())
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.cycles.len())
    }

    async fn summary(&self) -> Result<RunningSummary> {
        Ok(self.summary)
    }

    async fn last_activity(&self) -> Result<Option<Time>> {
        Ok(self.last_activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evocycle_core::{CycleStatus, CycleType};

    fn completed() -> CycleRecord {
        let mut cycle = CycleRecord::new(CycleType::QuantumFocused, 10.0);
        cycle.finalize(0.5, 1.0, 1.0, chrono::Utc::now());
        cycle
    }

    #[tokio::test]
    async fn test_record_and_load() {
        let mut history = MemoryHistory::new();
        let cycle = completed();
        let id = cycle.id.clone();

        history.record(cycle.clone()).await.unwrap();

        assert_eq!(history.count().await.unwrap(), 1);
        assert_eq!(history.load_cycle(&id).await.unwrap(), Some(cycle));
        assert_eq!(history.summary().await.unwrap().cycle_count, 1);
        assert!(history.last_activity().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_rejects_duplicates() {
        let mut history = MemoryHistory::new();
        let cycle = completed();
        history.record(cycle.clone()).await.unwrap();

        let err = history.record(cycle.clone()).await.unwrap_err();
        assert_eq!(err, HistoryError::Duplicate(cycle.id));
        assert_eq!(history.count().await.unwrap(), 1);
        assert_eq!(history.summary().await.unwrap().cycle_count, 1);
    }

    #[tokio::test]
    async fn test_rejects_unfinished_cycles() {
        let mut history = MemoryHistory::new();

        let active = CycleRecord::new(CycleType::Comprehensive, 30.0);
        let err = history.record(active).await.unwrap_err();
        assert!(matches!(err, HistoryError::NotCompleted { status: CycleStatus::Active, .. }));

        let mut failed = CycleRecord::new(CycleType::Comprehensive, 30.0);
        failed.fail(chrono::Utc::now());
        assert!(history.record(failed).await.is_err());

        assert_eq!(history.count().await.unwrap(), 0);
        assert_eq!(history.summary().await.unwrap(), RunningSummary::default());
        assert!(history.last_activity().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_in_record_order() {
        let mut history = MemoryHistory::new();
        let mut ids = Vec::new();
        for _ in 0..5 {
            let cycle = completed();
            ids.push(cycle.id.clone());
            history.record(cycle).await.unwrap();
        }

        let listed: Vec<CycleId> = history.list_cycles().await.unwrap().into_iter().map(|c| c.id).collect();
        assert_eq!(listed, ids);
    }
}
