//! Seeded random sources.
//!
//! Every randomised operation in this crate takes an explicit `&mut R: Rng`
//! handle; there is no process-wide generator.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible random source from a seed.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use tsp_seed::random::create_rng;
///
/// let mut a = create_rng(42);
/// let mut b = create_rng(42);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
