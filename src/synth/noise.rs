//! Gaussian noise synthesis.
//!
//! All noise variants in the catalog (white, pink, brown) currently use
//! this same routine; no spectral shaping is applied to the colored
//! variants.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use super::sample_count;

/// Standard deviation of generated noise samples.
pub const NOISE_STD_DEV: f32 = 0.1;

/// Builds a buffer of Gaussian-distributed samples (mean 0, σ = 0.1).
///
/// Draws from the caller-provided RNG, so output is reproducible when
/// the RNG is seeded and differs across runs otherwise.
pub fn gaussian_noise<R: Rng>(duration_sec: f64, sample_rate: u32, rng: &mut R) -> Vec<f32> {
    let count = sample_count(duration_sec, sample_rate);
    (0..count)
        .map(|_| {
            let n: f32 = StandardNormal.sample(rng);
            n * NOISE_STD_DEV
        })
        .collect()
}
