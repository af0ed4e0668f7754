//! Strategy simulators.
//!
//! Each simulator is a pure function of its strategy config, the phase
//! context and a random stream. None of them performs I/O.

use evocycle_core::{PhaseDetails, ProducedArtifacts};
use rand::Rng;

pub mod genetic;
pub mod quantum;
pub mod alchemical;
pub mod terra;
pub mod consciousness;
pub mod generic;

/// Raw output of a simulator, before effectiveness is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// Artifacts for the cycle collections
    pub produced: ProducedArtifacts,
    /// Simulator report
    pub details: PhaseDetails,
}

/// Uniform draw in `(0, max]`; zero when `max` is not positive.
pub(crate) fn positive_up_to<R: Rng + ?Sized>(rng: &mut R, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    max * (1.0 - rng.gen::<f64>())
}

pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_positive_up_to_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = positive_up_to(&mut rng, 0.1);
            assert!(v > 0.0 && v <= 0.1);
        }
        assert_eq!(positive_up_to(&mut rng, 0.0), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert_eq!(mean([1.0, 2.0, 3.0]), Some(2.0));
    }
}
