//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a given point, always move to the
//! nearest unvisited point. Ties go to the lowest index.
//!
//! # Complexity
//!
//! O(n²) time, O(n) extra space for the visited flags.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::Result;

/// Constructs a permutation using the nearest-neighbor heuristic.
///
/// # Arguments
///
/// * `distances` — Distance matrix
/// * `start` — First point of the tour; drawn uniformly from `rng` if `None`
/// * `rng` — Random source, only consulted when `start` is `None`
///
/// Fails with [`TourError::InvalidIndex`](crate::error::TourError::InvalidIndex)
/// if `start` is out of range.
///
/// # Examples
///
/// ```
/// use tsp_seed::models::PointSet;
/// use tsp_seed::distance::DistanceMatrix;
/// use tsp_seed::constructive::nearest_neighbor;
/// use tsp_seed::random::create_rng;
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let dm = DistanceMatrix::from_points(&points);
///
/// let path = nearest_neighbor(&dm, Some(0), &mut create_rng(0)).unwrap();
/// assert_eq!(path, vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor<R: Rng>(
    distances: &DistanceMatrix,
    start: Option<usize>,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let n = distances.size();
    let start = match start {
        Some(s) => {
            distances.check_index(s)?;
            s
        }
        None if n == 0 => return Ok(Vec::new()),
        None => rng.random_range(0..n),
    };

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut path = Vec::with_capacity(n);
    path.push(start);

    let mut current = start;
    while let Some(next) = distances.nearest_unvisited(current, &visited)? {
        visited[next] = true;
        path.push(next);
        current = next;
    }

    log::debug!("nearest_neighbor: n={n} start={start}");
    Ok(path)
}
