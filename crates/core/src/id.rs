//! Unique identifiers for evocycle entities.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a cycle.
///
/// Rendered as `cycle_<ulid>`: the ULID carries a millisecond timestamp
/// followed by a random suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CycleId(String);

impl CycleId {
    /// Generate a new CycleId
    pub fn new() -> Self {
        Self(format!("cycle_{}", Ulid::new()))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CycleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CycleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CycleId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// Identifier of a phase within its cycle (`phase_1` .. `phase_N`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseId(String);

impl PhaseId {
    /// Id for the phase at 1-based position `ordinal`.
    pub fn ordinal(ordinal: usize) -> Self {
        Self(format!("phase_{}", ordinal))
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_id_format() {
        let id = CycleId::new();
        assert!(id.as_str().starts_with("cycle_"));
        assert_eq!(id.as_str().len(), "cycle_".len() + 26);
    }

    #[test]
    fn test_cycle_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| CycleId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_phase_id_ordinal() {
        assert_eq!(PhaseId::ordinal(1).as_str(), "phase_1");
        assert_eq!(PhaseId::ordinal(4).to_string(), "phase_4");
    }
}
