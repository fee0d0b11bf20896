//! Seeded randomness shared by the synthesizers.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

/// The generator every synthesizer draws its noise from.
pub type SynthesisRng = ChaCha8Rng;

/// A generator that always yields the same stream for the same `seed`.
pub fn seeded_rng(seed: u64) -> SynthesisRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// One draw from a zero-mean Gaussian with the given standard deviation.
pub(crate) fn gaussian<R: Rng + ?Sized>(rng: &mut R, std_dev: f64) -> f64 {
    let z: f64 = StandardNormal.sample(rng);
    z * std_dev
}

/// `count` consecutive Gaussian draws.
pub(crate) fn gaussian_series<R: Rng + ?Sized>(
    rng: &mut R,
    std_dev: f64,
    count: usize,
) -> Vec<f64> {
    (0..count).map(|_| gaussian(rng, std_dev)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let a = gaussian_series(&mut seeded_rng(7), 1.0, 32);
        let b = gaussian_series(&mut seeded_rng(7), 1.0, 32);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_moments() {
        let draws = gaussian_series(&mut seeded_rng(99), 2.0, 20_000);
        let n = draws.len() as f64;
        let mean = draws.iter().sum::<f64>() / n;
        let var = draws.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert!(mean.abs() < 0.1, "mean was {mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.1, "std was {}", var.sqrt());
    }
}
