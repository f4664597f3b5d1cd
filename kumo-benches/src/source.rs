//! Synthetic benchmark point sets.
//!
//! Provides a deterministic uniform point generator so that benchmark runs
//! are reproducible across machines and invocations.

use kumo_core::Point;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors raised while generating synthetic benchmark data.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticError {
    /// A floating-point parameter was non-finite or out of range.
    #[error("parameter `{parameter}` must be finite and positive")]
    InvalidFloatParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

/// Configuration for a uniform synthetic point set.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Side length of the square the points are drawn from.
    pub extent: f64,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Generates `config.point_count` points uniformly inside a square.
///
/// The same configuration always yields the same point set.
///
/// # Errors
/// Returns [`SyntheticError::InvalidFloatParameter`] when `extent` is not a
/// finite positive number.
pub fn generate_points(config: &SyntheticConfig) -> Result<Vec<Point>, SyntheticError> {
    if !config.extent.is_finite() || config.extent <= 0.0 {
        return Err(SyntheticError::InvalidFloatParameter { parameter: "extent" });
    }
    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok((0..config.point_count)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..config.extent),
                rng.gen_range(0.0..config.extent),
            )
        })
        .collect())
}
