//! Random two-node swap.
//!
//! Picks two distinct positions uniformly at random and exchanges their
//! values. The input permutation is left untouched; a new one is returned.
//! This is the mutation primitive for local-search or metaheuristic loops.

use rand::Rng;

use crate::error::{Result, TourError};

/// Returns a copy of `path` with two distinct, uniformly chosen positions swapped.
///
/// Fails with [`TourError::DegenerateInput`] when `path` has fewer than two
/// elements.
///
/// # Examples
///
/// ```
/// use tsp_seed::perturbation::node_swap;
/// use tsp_seed::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let path = vec![0, 1, 2, 3];
/// let swapped = node_swap(&path, &mut rng).unwrap();
/// let moved = path.iter().zip(&swapped).filter(|(a, b)| a != b).count();
/// assert_eq!(moved, 2);
/// assert_eq!(path, vec![0, 1, 2, 3]);
/// ```
pub fn node_swap<R: Rng>(path: &[usize], rng: &mut R) -> Result<Vec<usize>> {
    let n = path.len();
    if n < 2 {
        return Err(TourError::DegenerateInput {
            len: n,
            required: 2,
        });
    }

    // Draw the second position from the n-1 slots other than the first.
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }

    let mut swapped = path.to_vec();
    swapped.swap(i, j);
    log::trace!("node_swap: positions=({i}, {j}) len={n}");
    Ok(swapped)
}
