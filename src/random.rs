//! Random number generation for synthetic samples.
//!
//! Provides seeded RNG construction and the primitive draws used by
//! [`Gaussian::draw_sample`](crate::gaussian::Gaussian::draw_sample) and
//! [`Binomial::draw_sample`](crate::binomial::Binomial::draw_sample).
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution as _, StandardNormal};

use crate::error::{DistributionError, Result};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
///
/// # Examples
/// ```
/// use u_probdist::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws one standard normal variate (Ziggurat, via `rand_distr`).
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    rng.sample(StandardNormal)
}

/// Draws `len` Bernoulli(p) outcomes as `1.0` (success) or `0.0`.
///
/// # Errors
/// [`DistributionError::InvalidParameters`] if `p` is outside `[0, 1]`.
pub fn bernoulli_outcomes<R: Rng>(p: f64, len: usize, rng: &mut R) -> Result<Vec<f64>> {
    let trial = Bernoulli::new(p).map_err(|e| {
        DistributionError::InvalidParameters(format!("Bernoulli p={p}: {e}"))
    })?;
    Ok((0..len)
        .map(|_| if trial.sample(&mut *rng) { 1.0 } else { 0.0 })
        .collect())
}
