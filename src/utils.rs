//! Utility functions for the gridq crate

use rand::{SeedableRng, rngs::StdRng};

/// Build a standard RNG, seeded when a seed is given.
///
/// Every random source in the crate goes through this so that a single
/// seed makes an entire training run reproducible.
///
/// # Examples
///
/// ```
/// use gridq::utils::build_rng;
/// use rand::Rng;
///
/// let mut first = build_rng(Some(7));
/// let mut second = build_rng(Some(7));
/// assert_eq!(first.random::<u64>(), second.random::<u64>());
/// ```
pub fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}
