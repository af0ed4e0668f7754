//! Cycle orchestration.

use std::sync::Arc;

use chrono::Utc;
use evocycle_core::{CycleId, CycleRecord, CycleType, EngineEvent, MAX_CONSCIOUSNESS};
use evocycle_execution::{generate_for, ExecutionError, PhaseContext, PhaseExecutor};
use evocycle_registry::{RegistrySizes, StrategyRegistries};
use evocycle_storage::{HistoryError, HistoryStore, MemoryHistory};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::events::EventBus;
use crate::metrics::{CycleMetrics, MetricsSnapshot};

/// Errors returned by the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// `initialize()` has not been called
    #[error("engine not initialized")]
    NotInitialized,

    /// Cycle duration is not a positive finite number
    #[error("invalid cycle duration: {0}")]
    InvalidDuration(f64),

    /// Base consciousness is outside [0, 10]
    #[error("invalid base consciousness: {0}")]
    InvalidConsciousness(f64),

    /// A phase failed; the cycle was marked failed and not recorded
    #[error("cycle {cycle_id} failed: {source}")]
    CycleFailed {
        /// The aborted cycle
        cycle_id: CycleId,
        /// What the phase raised
        #[source]
        source: ExecutionError,
    },

    /// History rejected the finished cycle
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Result of [`EvolutionEngine::initialize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitStatus {
    /// Always `"initialized"`
    pub status: String,
}

/// Parameters of one cycle run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRequest {
    /// Cycle type name; unknown names run as `comprehensive`
    pub cycle_type: String,
    /// Total planned duration in seconds
    pub duration_secs: f64,
    /// Starting consciousness level; the engine config default when absent
    pub base_consciousness: Option<f64>,
}

impl CycleRequest {
    /// Create a request.
    pub fn new(cycle_type: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            cycle_type: cycle_type.into(),
            duration_secs,
            base_consciousness: None,
        }
    }

    /// Set the starting consciousness level.
    pub fn with_base_consciousness(mut self, level: f64) -> Self {
        self.base_consciousness = Some(level);
        self
    }
}

impl Default for CycleRequest {
    fn default() -> Self {
        Self::new(CycleType::Comprehensive.as_str(), 30.0)
    }
}

/// The evolution engine.
///
/// Runs cycles of phases against the strategy registries, records finished
/// cycles in history and publishes lifecycle events. Every method takes
/// `&self`, so an engine wrapped in an `Arc` can run cycles from several
/// tasks at once; each cycle owns its record and random stream, and only the
/// final history write is serialized.
pub struct EvolutionEngine<H: HistoryStore = MemoryHistory> {
    config: EngineConfig,
    registries: RwLock<Option<Arc<StrategyRegistries>>>,
    executor: PhaseExecutor,
    history: Mutex<H>,
    events: EventBus,
    rng: Mutex<ChaCha20Rng>,
}

impl EvolutionEngine<MemoryHistory> {
    /// Create an engine with in-memory history.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_history(config, MemoryHistory::new())
    }
}

impl Default for EvolutionEngine<MemoryHistory> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<H: HistoryStore> EvolutionEngine<H> {
    /// Create an engine over a history store.
    pub fn with_history(config: EngineConfig, history: H) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self {
            events: EventBus::new(config.event_capacity),
            registries: RwLock::new(None),
            executor: PhaseExecutor::standard(),
            history: Mutex::new(history),
            rng: Mutex::new(rng),
            config,
        }
    }

    /// Replace the phase executor.
    pub fn with_executor(mut self, executor: PhaseExecutor) -> Self {
        self.executor = executor;
        self
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Populate the strategy registries.
    ///
    /// Must be called before the first cycle. Calling it again reloads the
    /// same catalog.
    pub async fn initialize(&self) -> InitStatus {
        let registries = StrategyRegistries::configured();
        let sizes = registries.sizes();
        *self.registries.write().await = Some(Arc::new(registries));

        info!(configs = sizes.total(), "Evolution engine initialized");
        self.events.publish(EngineEvent::Initialized);

        InitStatus {
            status: "initialized".to_string(),
        }
    }

    /// Whether `initialize()` has run.
    pub async fn is_initialized(&self) -> bool {
        self.registries.read().await.is_some()
    }

    /// The loaded registries, if initialized.
    pub async fn registries(&self) -> Option<Arc<StrategyRegistries>> {
        self.registries.read().await.clone()
    }

    /// Configs per registry; all zero before initialization.
    pub async fn registry_sizes(&self) -> RegistrySizes {
        self.registries
            .read()
            .await
            .as_ref()
            .map(|r| r.sizes())
            .unwrap_or_default()
    }

    /// Subscribe to engine events. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Run one cycle and return the completed record.
    pub async fn start_evolution_cycle(
        &self,
        cycle_type: &str,
        duration_secs: f64,
    ) -> Result<CycleRecord, EngineError> {
        self.run_cycle(CycleRequest::new(cycle_type, duration_secs)).await
    }

    /// Run the default cycle from the engine config.
    pub async fn start_default_cycle(&self) -> Result<CycleRecord, EngineError> {
        let request = CycleRequest::new(
            self.config.default_cycle_type.clone(),
            self.config.default_duration_secs,
        );
        self.run_cycle(request).await
    }

    /// Run one cycle to completion.
    ///
    /// Phases run strictly in order with a pause between consecutive
    /// phases. On success the finalized cycle is recorded in history and
    /// returned. If a phase fails the cycle is marked failed, a
    /// `cycle_failed` event is published and the error is returned; history
    /// is left untouched.
    pub async fn run_cycle(&self, request: CycleRequest) -> Result<CycleRecord, EngineError> {
        let duration = request.duration_secs;
        if !duration.is_finite() || duration <= 0.0 {
            return Err(EngineError::InvalidDuration(duration));
        }
        let base = request.base_consciousness.unwrap_or(self.config.base_consciousness);
        if !(0.0..=MAX_CONSCIOUSNESS).contains(&base) {
            return Err(EngineError::InvalidConsciousness(base));
        }

        let registries = self.registries().await.ok_or(EngineError::NotInitialized)?;
        let mut rng = {
            let mut master = self.rng.lock().await;
            ChaCha20Rng::seed_from_u64(master.gen())
        };

        let cycle_type = CycleType::parse(&request.cycle_type).unwrap_or_else(|| {
            warn!(requested = %request.cycle_type, "Unknown cycle type, running comprehensive");
            CycleType::Comprehensive
        });

        let mut cycle = CycleRecord::new(cycle_type, duration);
        cycle.phases = generate_for(cycle_type, duration);
        let phase_count = cycle.phases.len();

        info!(
            cycle_id = %cycle.id,
            cycle_type = %cycle_type,
            duration_secs = duration,
            phases = phase_count,
            "Starting evolution cycle"
        );
        self.events.publish(EngineEvent::CycleStarted {
            cycle_id: cycle.id.clone(),
            cycle_type,
            phase_count,
        });

        let context = PhaseContext {
            consciousness_level: base,
        };
        let pause = self.config.phase_pause();

        for index in 0..phase_count {
            let phase = &mut cycle.phases[index];
            phase.activate(Utc::now());
            debug!(cycle_id = %cycle.id, phase = %phase.name, "Phase started");
            self.events.publish(EngineEvent::PhaseStarted {
                cycle_id: cycle.id.clone(),
                phase: Box::new(phase.clone()),
            });

            let result = match self.executor.execute(phase, &context, &registries, &mut rng) {
                Ok(result) => result,
                Err(e) => return Err(self.abort(cycle, e)),
            };

            cycle.absorb(&result.produced);
            let phase = &mut cycle.phases[index];
            phase.complete(result, Utc::now());
            debug!(
                cycle_id = %cycle.id,
                phase = %phase.name,
                effectiveness = phase.effectiveness().unwrap_or_default(),
                "Phase completed"
            );
            self.events.publish(EngineEvent::PhaseCompleted {
                cycle_id: cycle.id.clone(),
                phase: Box::new(phase.clone()),
            });

            if index + 1 < phase_count && !pause.is_zero() {
                tokio::time::sleep(pause).await;
            }
        }

        let metrics = CycleMetrics::compute(&cycle, base);
        cycle.finalize(metrics.fitness, metrics.complexity, metrics.consciousness, Utc::now());

        self.history.lock().await.record(cycle.clone()).await?;

        info!(
            cycle_id = %cycle.id,
            fitness = cycle.fitness,
            complexity = cycle.complexity,
            consciousness = cycle.consciousness,
            "Evolution cycle completed"
        );
        self.events.publish(EngineEvent::CycleCompleted {
            cycle: Box::new(cycle.clone()),
        });

        Ok(cycle)
    }

    fn abort(&self, mut cycle: CycleRecord, source: ExecutionError) -> EngineError {
        cycle.fail(Utc::now());
        error!(cycle_id = %cycle.id, error = %source, "Evolution cycle failed");

        let cycle_id = cycle.id.clone();
        self.events.publish(EngineEvent::CycleFailed {
            cycle: Box::new(cycle),
            error: source.to_string(),
        });
        EngineError::CycleFailed { cycle_id, source }
    }

    /// Snapshot of history counters and registry sizes.
    pub async fn get_metrics(&self) -> Result<MetricsSnapshot, EngineError> {
        let registry_sizes = self.registry_sizes().await;
        let history = self.history.lock().await;
        let running_summary = history.summary().await?;
        Ok(MetricsSnapshot {
            cycle_count: running_summary.cycle_count,
            registry_sizes,
            running_summary,
            last_activity: history.last_activity().await?,
        })
    }

    /// Load a recorded cycle.
    pub async fn get_cycle(&self, id: &CycleId) -> Result<Option<CycleRecord>, EngineError> {
        Ok(self.history.lock().await.load_cycle(id).await?)
    }

    /// All recorded cycles, in completion order.
    pub async fn list_cycles(&self) -> Result<Vec<CycleRecord>, EngineError> {
        Ok(self.history.lock().await.list_cycles().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use evocycle_core::{CycleStatus, PhaseStatus, StrategyKind};
    use evocycle_execution::{DispatchTable, Route};
    use evocycle_registry::RegistryError;

    fn test_config(seed: u64) -> EngineConfig {
        EngineConfig::default().with_phase_pause_ms(0).with_seed(seed)
    }

    async fn ready_engine(seed: u64) -> EvolutionEngine {
        let engine = EvolutionEngine::new(test_config(seed));
        engine.initialize().await;
        engine
    }

    fn drain(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Clear the fields that depend on the wall clock or the id generator.
    fn without_volatile(mut cycle: CycleRecord) -> CycleRecord {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        cycle.id = "cycle_fixed".parse().unwrap();
        cycle.start_time = epoch;
        cycle.end_time = None;
        for phase in &mut cycle.phases {
            phase.start_time = None;
            phase.end_time = None;
        }
        cycle
    }

    fn corrupted_executor() -> PhaseExecutor {
        let mut table = DispatchTable::standard();
        table.insert(
            "quantum_entanglement",
            Route::Quantum {
                operator: "quantum_teleportation".to_string(),
            },
        );
        PhaseExecutor::new(table)
    }

    #[tokio::test]
    async fn test_initialize() {
        let engine = EvolutionEngine::new(test_config(1));
        assert!(!engine.is_initialized().await);
        assert_eq!(engine.registry_sizes().await.total(), 0);

        let mut rx = engine.subscribe();
        let status = engine.initialize().await;
        assert_eq!(status.status, "initialized");
        assert!(engine.is_initialized().await);
        assert_eq!(rx.recv().await.unwrap().kind(), "initialized");

        let sizes = engine.registry_sizes().await;
        engine.initialize().await;
        assert_eq!(engine.registry_sizes().await, sizes);
    }

    #[tokio::test]
    async fn test_cycle_requires_initialize() {
        let engine = EvolutionEngine::new(test_config(1));
        let err = engine.start_evolution_cycle("comprehensive", 30.0).await.unwrap_err();
        assert_eq!(err, EngineError::NotInitialized);
    }

    #[tokio::test]
    async fn test_rejects_invalid_duration() {
        let engine = ready_engine(1).await;
        for duration in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = engine.start_evolution_cycle("comprehensive", duration).await.unwrap_err();
            assert!(matches!(err, EngineError::InvalidDuration(_)));
        }
        assert!(engine.list_cycles().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejects_invalid_base_consciousness() {
        let engine = ready_engine(1).await;
        let request = CycleRequest::new("comprehensive", 1.0).with_base_consciousness(11.0);
        let err = engine.run_cycle(request).await.unwrap_err();
        assert_eq!(err, EngineError::InvalidConsciousness(11.0));
    }

    #[tokio::test]
    async fn test_quantum_focused_cycle() {
        let engine = ready_engine(7).await;
        let cycle = engine.start_evolution_cycle("quantum_focused", 10.0).await.unwrap();

        assert_eq!(cycle.cycle_type, CycleType::QuantumFocused);
        assert_eq!(cycle.status, CycleStatus::Completed);
        assert!(cycle.end_time.is_some());

        let durations: Vec<f64> = cycle.phases.iter().map(|p| p.planned_duration_secs).collect();
        assert_eq!(durations.len(), 3);
        for (actual, expected) in durations.iter().zip([4.0, 3.0, 3.0]) {
            assert!((actual - expected).abs() < 1e-9);
        }
        for phase in &cycle.phases {
            assert_eq!(phase.status, PhaseStatus::Completed);
            assert!(phase.start_time.unwrap() <= phase.end_time.unwrap());
            assert!(phase.result.is_some());
        }

        assert!((0.0..=1.0).contains(&cycle.fitness));
        // Three quantum phases, 5 trials each
        assert_eq!(cycle.mutations.len(), 15);
        assert!((cycle.complexity - 2.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_phase_status_progression_in_events() {
        let engine = ready_engine(8).await;
        let mut rx = engine.subscribe();
        engine.start_evolution_cycle("quantum_focused", 10.0).await.unwrap();

        let events = drain(&mut rx);
        let kinds: Vec<&str> = events.iter().map(EngineEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "cycle_started",
                "phase_started",
                "phase_completed",
                "phase_started",
                "phase_completed",
                "phase_started",
                "phase_completed",
                "cycle_completed",
            ]
        );

        for event in &events {
            match event {
                EngineEvent::PhaseStarted { phase, .. } => {
                    assert_eq!(phase.status, PhaseStatus::Active);
                    assert!(phase.result.is_none());
                }
                EngineEvent::PhaseCompleted { phase, .. } => {
                    assert_eq!(phase.status, PhaseStatus::Completed);
                    assert!(phase.result.is_some());
                }
                EngineEvent::CycleCompleted { cycle } => {
                    assert_eq!(cycle.status, CycleStatus::Completed);
                }
                _ => {}
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_type_runs_comprehensive() {
        let engine = ready_engine(9).await;
        let cycle = engine.start_evolution_cycle("hyperdimensional", 30.0).await.unwrap();
        assert_eq!(cycle.cycle_type, CycleType::Comprehensive);
        assert_eq!(cycle.phases.len(), 4);
    }

    #[tokio::test]
    async fn test_same_seed_same_cycle() {
        let a = ready_engine(42).await;
        let b = ready_engine(42).await;

        for ty in CycleType::ALL {
            let left = a.start_evolution_cycle(ty.as_str(), 30.0).await.unwrap();
            let right = b.start_evolution_cycle(ty.as_str(), 30.0).await.unwrap();
            assert_eq!(without_volatile(left), without_volatile(right));
        }
    }

    #[tokio::test]
    async fn test_history_grows_by_one_per_cycle() {
        let engine = ready_engine(10).await;

        let before = engine.get_metrics().await.unwrap();
        assert_eq!(before.cycle_count, 0);
        assert!(before.last_activity.is_none());

        let cycle = engine.start_evolution_cycle("capability_focused", 5.0).await.unwrap();
        let after = engine.get_metrics().await.unwrap();

        assert_eq!(after.cycle_count, before.cycle_count + 1);
        assert_eq!(engine.list_cycles().await.unwrap().len(), 1);
        assert_eq!(engine.get_cycle(&cycle.id).await.unwrap(), Some(cycle.clone()));
        assert_eq!(after.running_summary.last_fitness, cycle.fitness);
        assert_eq!(after.running_summary.total_adaptations, cycle.adaptations.len() as u64);
        assert_eq!(after.last_activity, cycle.end_time);
        assert_eq!(after.registry_sizes.total(), 12);
    }

    #[tokio::test]
    async fn test_summary_accumulates_over_cycles() {
        let engine = ready_engine(11).await;
        for ty in CycleType::ALL {
            engine.start_evolution_cycle(ty.as_str(), 2.0).await.unwrap();
        }

        let cycles = engine.list_cycles().await.unwrap();
        let metrics = engine.get_metrics().await.unwrap();
        let summary = metrics.running_summary;

        assert_eq!(summary.cycle_count, 4);
        let mutations: usize = cycles.iter().map(|c| c.mutations.len()).sum();
        let transformations: usize = cycles.iter().map(|c| c.transformations.len()).sum();
        let evolutions: usize = cycles.iter().map(|c| c.evolutions.len()).sum();
        assert_eq!(summary.total_mutations, mutations as u64);
        assert_eq!(summary.total_transformations, transformations as u64);
        assert_eq!(summary.total_evolutions, evolutions as u64);
        assert_eq!(summary.last_complexity, cycles[3].complexity);
    }

    #[tokio::test]
    async fn test_metric_bounds_hold_across_seeds() {
        for seed in 0..16 {
            let engine = ready_engine(seed).await;
            for ty in CycleType::ALL {
                let request = CycleRequest::new(ty.as_str(), 1.0).with_base_consciousness(9.9);
                let cycle = engine.run_cycle(request).await.unwrap();
                assert!((0.0..=1.0).contains(&cycle.fitness), "fitness {}", cycle.fitness);
                assert!(cycle.complexity >= 1.0);
                assert!((0.0..=MAX_CONSCIOUSNESS).contains(&cycle.consciousness));
            }
        }
    }

    #[tokio::test]
    async fn test_consciousness_from_base() {
        let engine = ready_engine(12).await;
        let request = CycleRequest::new("consciousness_focused", 3.0).with_base_consciousness(2.0);
        let cycle = engine.run_cycle(request).await.unwrap();
        // All three focus labels mention consciousness or awareness
        assert!((cycle.consciousness - 2.3).abs() < 1e-9);

        let cycle = engine.start_evolution_cycle("capability_focused", 3.0).await.unwrap();
        assert!((cycle.consciousness - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_failed_phase_aborts_cycle() {
        let engine = EvolutionEngine::new(test_config(13)).with_executor(corrupted_executor());
        engine.initialize().await;
        let mut rx = engine.subscribe();

        let err = engine.start_evolution_cycle("quantum_focused", 10.0).await.unwrap_err();
        match &err {
            EngineError::CycleFailed { source, .. } => assert_eq!(
                source,
                &ExecutionError::ConfigurationNotFound(RegistryError::NotFound {
                    kind: StrategyKind::Mutation,
                    name: "quantum_teleportation".to_string(),
                })
            ),
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(engine.list_cycles().await.unwrap().is_empty());
        assert_eq!(engine.get_metrics().await.unwrap().cycle_count, 0);

        let events = drain(&mut rx);
        let failed = events
            .iter()
            .find_map(|e| match e {
                EngineEvent::CycleFailed { cycle, .. } => Some(cycle),
                _ => None,
            })
            .unwrap();
        assert_eq!(failed.status, CycleStatus::Failed);
        assert!(failed.end_time.is_some());
        // The first phase completed, the second was left active
        assert_eq!(failed.phases[0].status, PhaseStatus::Completed);
        assert_eq!(failed.phases[1].status, PhaseStatus::Active);
        assert_eq!(failed.phases[2].status, PhaseStatus::Pending);
        assert!(!events.iter().any(|e| e.kind() == "cycle_completed"));

        // Cycles that avoid the broken phase still run
        assert!(engine.start_evolution_cycle("comprehensive", 1.0).await.is_ok());
        assert_eq!(engine.get_metrics().await.unwrap().cycle_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_between_phases_only() {
        let engine = EvolutionEngine::new(EngineConfig::default().with_seed(14));
        engine.initialize().await;

        let started = tokio::time::Instant::now();
        engine.start_evolution_cycle("comprehensive", 30.0).await.unwrap();
        let elapsed = started.elapsed();

        // Four phases, three pauses of one second
        assert!(elapsed >= std::time::Duration::from_secs(3));
        assert!(elapsed < std::time::Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_concurrent_cycles_all_recorded() {
        let engine = Arc::new(ready_engine(15).await);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = Arc::clone(&engine);
                tokio::spawn(async move { engine.start_evolution_cycle("quantum_focused", 1.0).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        let metrics = engine.get_metrics().await.unwrap();
        assert_eq!(metrics.cycle_count, 8);
        assert_eq!(metrics.running_summary.total_mutations, 8 * 15);
    }

    #[tokio::test]
    async fn test_default_cycle_uses_config() {
        let config = test_config(16)
            .with_default_cycle_type("consciousness_focused")
            .with_default_duration_secs(6.0);
        let engine = EvolutionEngine::new(config);
        engine.initialize().await;

        let cycle = engine.start_default_cycle().await.unwrap();
        assert_eq!(cycle.cycle_type, CycleType::ConsciousnessFocused);
        assert_eq!(cycle.planned_duration_secs, 6.0);
    }
}
