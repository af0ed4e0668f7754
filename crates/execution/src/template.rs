//! Phase template generation.
//!
//! Each cycle type maps to a fixed, ordered list of phase templates. The
//! fractions of a type sum to 1.0, so the planned durations of the generated
//! phases reconstruct the requested total (up to floating-point rounding).

use evocycle_core::{CycleType, PhaseDescriptor, PhaseId};

/// One row of a cycle template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTemplate {
    /// Phase name
    pub name: &'static str,
    /// Share of the cycle duration
    pub fraction: f64,
    /// Focus label
    pub focus: &'static str,
}

const fn row(name: &'static str, fraction: f64, focus: &'static str) -> PhaseTemplate {
    PhaseTemplate { name, fraction, focus }
}

const COMPREHENSIVE: [PhaseTemplate; 4] = [
    row("genetic_optimization", 0.30, "capability_enhancement"),
    row("quantum_mutation", 0.20, "quantum_coherence"),
    row("alchemical_transformation", 0.25, "wisdom_extraction"),
    row("consciousness_integration", 0.25, "consciousness_expansion"),
];

const QUANTUM_FOCUSED: [PhaseTemplate; 3] = [
    row("quantum_superposition", 0.40, "superposition_exploration"),
    row("quantum_entanglement", 0.30, "entanglement_strengthening"),
    row("quantum_mutation", 0.30, "coherence_stabilization"),
];

const CONSCIOUSNESS_FOCUSED: [PhaseTemplate; 3] = [
    row("consciousness_expansion", 0.35, "awareness_deepening"),
    row("unity_integration", 0.35, "consciousness_unification"),
    row("terra_healing", 0.30, "planetary_consciousness"),
];

const CAPABILITY_FOCUSED: [PhaseTemplate; 3] = [
    row("genetic_optimization", 0.40, "capability_enhancement"),
    row("neural_evolution", 0.30, "architecture_optimization"),
    row("capability_integration", 0.30, "capability_integration"),
];

/// Template rows of a cycle type.
pub fn templates_for(cycle_type: CycleType) -> &'static [PhaseTemplate] {
    match cycle_type {
        CycleType::Comprehensive => &COMPREHENSIVE,
        CycleType::QuantumFocused => &QUANTUM_FOCUSED,
        CycleType::ConsciousnessFocused => &CONSCIOUSNESS_FOCUSED,
        CycleType::CapabilityFocused => &CAPABILITY_FOCUSED,
    }
}

/// Generate the ordered phases for a cycle type name.
///
/// Unknown names fall back to `comprehensive`; this never fails.
pub fn generate_phases(cycle_type: &str, total_secs: f64) -> Vec<PhaseDescriptor> {
    generate_for(CycleType::parse_or_default(cycle_type), total_secs)
}

/// Generate the ordered phases for a cycle type.
pub fn generate_for(cycle_type: CycleType, total_secs: f64) -> Vec<PhaseDescriptor> {
    templates_for(cycle_type)
        .iter()
        .enumerate()
        .map(|(i, t)| {
            PhaseDescriptor::new(PhaseId::ordinal(i + 1), t.name, total_secs * t.fraction, t.focus)
        })
        .collect()
}

/// Every distinct phase name used by any template.
pub fn all_phase_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CycleType::ALL
        .iter()
        .flat_map(|ty| templates_for(*ty).iter().map(|t| t.name))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use evocycle_core::PhaseStatus;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-6 * expected.abs().max(1.0);
        assert!((actual - expected).abs() <= tolerance, "{actual} != {expected}");
    }

    #[test]
    fn test_fractions_sum_to_one() {
        for ty in CycleType::ALL {
            let sum: f64 = templates_for(ty).iter().map(|t| t.fraction).sum();
            assert_close(sum, 1.0);
        }
    }

    #[test]
    fn test_planned_durations_reconstruct_total() {
        for ty in CycleType::ALL {
            for total in [0.001, 1.0, 10.0, 30.0, 77.7, 3600.0, 1.0e9] {
                let phases = generate_for(ty, total);
                let sum: f64 = phases.iter().map(|p| p.planned_duration_secs).sum();
                assert_close(sum, total);
            }
        }
    }

    #[test]
    fn test_phase_counts_per_type() {
        assert_eq!(generate_phases("comprehensive", 30.0).len(), 4);
        assert_eq!(generate_phases("quantum_focused", 30.0).len(), 3);
        assert_eq!(generate_phases("consciousness_focused", 30.0).len(), 3);
        assert_eq!(generate_phases("capability_focused", 30.0).len(), 3);
    }

    #[test]
    fn test_unknown_type_falls_back_to_comprehensive() {
        let fallback = generate_phases("hyperdimensional", 42.0);
        let comprehensive = generate_phases("comprehensive", 42.0);
        assert_eq!(fallback, comprehensive);
    }

    #[test]
    fn test_quantum_focused_durations() {
        let phases = generate_phases("quantum_focused", 10.0);
        let durations: Vec<f64> = phases.iter().map(|p| p.planned_duration_secs).collect();
        assert_eq!(durations.len(), 3);
        assert_close(durations[0], 4.0);
        assert_close(durations[1], 3.0);
        assert_close(durations[2], 3.0);
    }

    #[test]
    fn test_generated_phases_are_pending_with_ordinal_ids() {
        let phases = generate_phases("comprehensive", 30.0);
        for (i, phase) in phases.iter().enumerate() {
            assert_eq!(phase.id, PhaseId::ordinal(i + 1));
            assert_eq!(phase.status, PhaseStatus::Pending);
            assert!(phase.start_time.is_none());
            assert!(phase.end_time.is_none());
            assert!(phase.result.is_none());
        }
        assert_eq!(phases[0].name, "genetic_optimization");
        assert_eq!(phases[3].focus, "consciousness_expansion");
    }

    #[test]
    fn test_all_phase_names_distinct() {
        let names = all_phase_names();
        assert!(names.contains(&"terra_healing"));
        assert!(names.contains(&"capability_integration"));
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
    }
}
