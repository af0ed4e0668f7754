//! Engine configuration.

use std::path::Path;
use std::time::Duration;

use evocycle_core::{CycleType, MAX_CONSCIOUSNESS};
use serde::{Deserialize, Serialize};

/// Errors that can occur while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for [`EngineConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Engine configuration.
///
/// Every field has a default, so a config file only needs the fields it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pause between consecutive phases, in milliseconds
    pub phase_pause_ms: u64,

    /// Capacity of the event broadcast channel
    pub event_capacity: usize,

    /// Consciousness level a cycle starts from when the request gives none
    pub base_consciousness: f64,

    /// Seed of the master random generator; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Cycle type used when a caller does not name one
    pub default_cycle_type: String,

    /// Cycle duration used when a caller does not give one
    pub default_duration_secs: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            phase_pause_ms: 1000,
            event_capacity: 256,
            base_consciousness: 1.0,
            seed: None,
            default_cycle_type: CycleType::Comprehensive.as_str().to_string(),
            default_duration_secs: 30.0,
        }
    }
}

impl EngineConfig {
    /// Load a config from a JSON file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid("event_capacity must be at least 1".to_string()));
        }
        if !(0.0..=MAX_CONSCIOUSNESS).contains(&self.base_consciousness) {
            return Err(ConfigError::Invalid(format!(
                "base_consciousness must be within [0, {}], got {}",
                MAX_CONSCIOUSNESS, self.base_consciousness
            )));
        }
        if !self.default_duration_secs.is_finite() || self.default_duration_secs <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "default_duration_secs must be positive, got {}",
                self.default_duration_secs
            )));
        }
        Ok(())
    }

    /// Set the pause between phases.
    pub fn with_phase_pause_ms(mut self, ms: u64) -> Self {
        self.phase_pause_ms = ms;
        self
    }

    /// Set the event channel capacity.
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Set the default base consciousness.
    pub fn with_base_consciousness(mut self, level: f64) -> Self {
        self.base_consciousness = level;
        self
    }

    /// Seed the master random generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default cycle type.
    pub fn with_default_cycle_type(mut self, cycle_type: impl Into<String>) -> Self {
        self.default_cycle_type = cycle_type.into();
        self
    }

    /// Set the default cycle duration.
    pub fn with_default_duration_secs(mut self, secs: f64) -> Self {
        self.default_duration_secs = secs;
        self
    }

    /// Pause between phases as a [`Duration`].
    pub fn phase_pause(&self) -> Duration {
        Duration::from_millis(self.phase_pause_ms)
    }
}
