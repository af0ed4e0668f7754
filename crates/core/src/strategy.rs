//! Strategy configuration records.
//!
//! A strategy config is an immutable, named parameter set describing one
//! simulated algorithm variant. Configs are created once when the registries
//! are populated and are only ever read afterwards.

use serde::{Deserialize, Serialize};

/// The four kinds of strategy registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Evolutionary strategies (genetic / neural searches)
    Evolutionary,
    /// Mutation operators (quantum mutation batches)
    Mutation,
    /// Transformation processes (alchemical, consciousness practices)
    Transformation,
    /// Large-scale goals (planetary / galactic work)
    ScaleGoal,
}

impl StrategyKind {
    /// All kinds, in registry order.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Evolutionary,
        StrategyKind::Mutation,
        StrategyKind::Transformation,
        StrategyKind::ScaleGoal,
    ];

    /// Stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Evolutionary => "evolutionary",
            StrategyKind::Mutation => "mutation",
            StrategyKind::Transformation => "transformation",
            StrategyKind::ScaleGoal => "scale_goal",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parent selection policy of an evolutionary strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    Tournament,
    RankBased,
    RouletteWheel,
}

/// What an evolutionary run optimizes; names the best-candidate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionSubject {
    /// A population of capability individuals
    Individual,
    /// Candidate neural architectures
    Architecture,
}

/// Evolutionary strategy parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionaryStrategy {
    /// Registry key
    pub name: String,

    /// What the search evolves
    pub subject: EvolutionSubject,

    /// Population size
    pub population_size: usize,

    /// Number of generations simulated per phase
    pub generations: u32,

    /// Per-gene mutation rate
    pub mutation_rate: f64,

    /// Crossover rate
    pub crossover_rate: f64,

    /// Parent selection policy
    pub selection: SelectionPolicy,

    /// Individuals carried over unchanged each generation
    pub elite_count: usize,

    /// Fitness baseline at generation 0
    pub baseline_fitness: f64,

    /// Baseline gain per generation
    pub baseline_step: f64,

    /// Upper bound of the random per-generation improvement
    pub improvement_range: f64,
}

/// Mutation operator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationOperator {
    /// Registry key
    pub name: String,

    /// Success probability of each trial
    pub probability: f64,

    /// Trials per batch
    pub trials: u32,

    /// Coherence score before a batch
    pub coherence_baseline: f64,

    /// Coherence gain applied after each batch
    pub coherence_increment: f64,

    /// Upper bound of each improvement component
    pub max_improvement: f64,
}

/// Transformation process parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationProcess {
    /// Registry key
    pub name: String,

    /// Ordered stage names. For practice-based processes these are the practices.
    pub stages: Vec<String>,

    /// Catalyst used by the process
    pub catalyst: String,

    /// Multiplier converting purity into released energy
    pub energy_factor: f64,
}

/// Large-scale goal parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleGoal {
    /// Registry key
    pub name: String,

    /// Scope label (planetary, galactic, ...)
    pub scope: String,

    /// Number of contributions gathered per phase
    pub contributions: u32,

    /// Upper bound of the randomized participant count
    pub max_participants: u64,

    /// Consciousness level the goal aims for
    pub consciousness_threshold: f64,

    /// Named milestones
    pub milestones: Vec<String>,
}

/// A strategy configuration of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    Evolutionary(EvolutionaryStrategy),
    Mutation(MutationOperator),
    Transformation(TransformationProcess),
    ScaleGoal(ScaleGoal),
}

impl StrategyConfig {
    /// Registry key of the config.
    pub fn name(&self) -> &str {
        match self {
            StrategyConfig::Evolutionary(c) => &c.name,
            StrategyConfig::Mutation(c) => &c.name,
            StrategyConfig::Transformation(c) => &c.name,
            StrategyConfig::ScaleGoal(c) => &c.name,
        }
    }

    /// Which registry the config belongs to.
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyConfig::Evolutionary(_) => StrategyKind::Evolutionary,
            StrategyConfig::Mutation(_) => StrategyKind::Mutation,
            StrategyConfig::Transformation(_) => StrategyKind::Transformation,
            StrategyConfig::ScaleGoal(_) => StrategyKind::ScaleGoal,
        }
    }
}

impl From<EvolutionaryStrategy> for StrategyConfig {
    fn from(config: EvolutionaryStrategy) -> Self {
        StrategyConfig::Evolutionary(config)
    }
}

impl From<MutationOperator> for StrategyConfig {
    fn from(config: MutationOperator) -> Self {
        StrategyConfig::Mutation(config)
    }
}

impl From<TransformationProcess> for StrategyConfig {
    fn from(config: TransformationProcess) -> Self {
        StrategyConfig::Transformation(config)
    }
}

impl From<ScaleGoal> for StrategyConfig {
    fn from(config: ScaleGoal) -> Self {
        StrategyConfig::ScaleGoal(config)
    }
}
