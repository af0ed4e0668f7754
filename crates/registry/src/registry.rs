//! Strategy config registries.

use std::collections::HashMap;

use evocycle_core::{
    EvolutionaryStrategy, MutationOperator, ScaleGoal, StrategyConfig, StrategyKind,
    TransformationProcess,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog;

/// Error type for registry lookups.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur during registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The requested strategy name is not registered
    #[error("configuration not found: {kind} strategy '{name}'")]
    NotFound {
        /// Registry searched
        kind: StrategyKind,
        /// Name requested
        name: String,
    },
}

/// A name-keyed registry of configs of one kind.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    kind: StrategyKind,
    entries: HashMap<String, T>,
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            kind,
            entries: HashMap::new(),
        }
    }

    /// Register a config. An existing entry with the same name is replaced.
    pub fn register(&mut self, name: impl Into<String>, config: T) -> Option<T> {
        self.entries.insert(name.into(), config)
    }

    /// Get a config by name.
    pub fn get(&self, name: &str) -> Result<&T> {
        self.entries.get(name).ok_or_else(|| RegistryError::NotFound {
            kind: self.kind,
            name: name.to_string(),
        })
    }

    /// Whether a config is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered configs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Number of configs held by each registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySizes {
    /// Evolutionary strategies
    pub evolutionary: usize,
    /// Mutation operators
    pub mutation: usize,
    /// Transformation processes
    pub transformation: usize,
    /// Large-scale goals
    pub scale_goal: usize,
}

impl RegistrySizes {
    /// Total across all registries.
    pub fn total(&self) -> usize {
        self.evolutionary + self.mutation + self.transformation + self.scale_goal
    }
}

/// The four strategy registries.
#[derive(Debug, Clone)]
pub struct StrategyRegistries {
    evolutionary: Registry<EvolutionaryStrategy>,
    mutation: Registry<MutationOperator>,
    transformation: Registry<TransformationProcess>,
    scale_goal: Registry<ScaleGoal>,
}

impl StrategyRegistries {
    /// Create empty registries.
    pub fn new() -> Self {
        Self {
            evolutionary: Registry::new(StrategyKind::Evolutionary),
            mutation: Registry::new(StrategyKind::Mutation),
            transformation: Registry::new(StrategyKind::Transformation),
            scale_goal: Registry::new(StrategyKind::ScaleGoal),
        }
    }

    /// Create registries populated from the fixed catalog.
    pub fn configured() -> Self {
        let mut registries = Self::new();
        registries.configure();
        registries
    }

    /// Populate every registry with the fixed catalog.
    ///
    /// Re-configuring replaces the previous contents.
    pub fn configure(&mut self) {
        self.evolutionary.clear();
        self.mutation.clear();
        self.transformation.clear();
        self.scale_goal.clear();

        for config in catalog::all() {
            self.register(config);
        }

        debug!(sizes = ?self.sizes(), "Strategy registries configured");
    }

    /// Register a config in the registry matching its kind.
    pub fn register(&mut self, config: StrategyConfig) {
        match config {
            StrategyConfig::Evolutionary(c) => {
                self.evolutionary.register(c.name.clone(), c);
            }
            StrategyConfig::Mutation(c) => {
                self.mutation.register(c.name.clone(), c);
            }
            StrategyConfig::Transformation(c) => {
                self.transformation.register(c.name.clone(), c);
            }
            StrategyConfig::ScaleGoal(c) => {
                self.scale_goal.register(c.name.clone(), c);
            }
        }
    }

    /// Look up a config of any kind by name.
    pub fn get(&self, kind: StrategyKind, name: &str) -> Result<StrategyConfig> {
        Ok(match kind {
            StrategyKind::Evolutionary => self.evolutionary(name)?.clone().into(),
            StrategyKind::Mutation => self.mutation(name)?.clone().into(),
            StrategyKind::Transformation => self.transformation(name)?.clone().into(),
            StrategyKind::ScaleGoal => self.scale_goal(name)?.clone().into(),
        })
    }

    /// Look up an evolutionary strategy.
    pub fn evolutionary(&self, name: &str) -> Result<&EvolutionaryStrategy> {
        self.evolutionary.get(name)
    }

    /// Look up a mutation operator.
    pub fn mutation(&self, name: &str) -> Result<&MutationOperator> {
        self.mutation.get(name)
    }

    /// Look up a transformation process.
    pub fn transformation(&self, name: &str) -> Result<&TransformationProcess> {
        self.transformation.get(name)
    }

    /// Look up a large-scale goal.
    pub fn scale_goal(&self, name: &str) -> Result<&ScaleGoal> {
        self.scale_goal.get(name)
    }

    /// Registered names of one kind, sorted.
    pub fn names(&self, kind: StrategyKind) -> Vec<&str> {
        match kind {
            StrategyKind::Evolutionary => self.evolutionary.names(),
            StrategyKind::Mutation => self.mutation.names(),
            StrategyKind::Transformation => self.transformation.names(),
            StrategyKind::ScaleGoal => self.scale_goal.names(),
        }
    }

    /// Sizes of every registry.
    pub fn sizes(&self) -> RegistrySizes {
        RegistrySizes {
            evolutionary: self.evolutionary.len(),
            mutation: self.mutation.len(),
            transformation: self.transformation.len(),
            scale_goal: self.scale_goal.len(),
        }
    }
}

impl Default for StrategyRegistries {
    fn default() -> Self {
        Self::new()
    }
}
