//! Uniform random permutation.

use rand::Rng;

/// Returns a uniformly shuffled permutation of `0..n`.
///
/// Uses a Fisher-Yates shuffle driven by `rng`, so the same seed always
/// yields the same order.
///
/// # Examples
///
/// ```
/// use tsp_seed::constructive::random_permutation;
/// use tsp_seed::random::create_rng;
///
/// let a = random_permutation(10, &mut create_rng(1));
/// let b = random_permutation(10, &mut create_rng(1));
/// assert_eq!(a, b);
///
/// let mut sorted = a.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (0..10).collect::<Vec<_>>());
/// ```
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();

    // Fisher-Yates shuffle
    for i in (1..perm.len()).rev() {
        let j = rng.random_range(0..=i);
        perm.swap(i, j);
    }

    log::debug!("random_permutation: n={n}");
    perm
}
