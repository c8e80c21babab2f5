//! Dense distance matrix.

use crate::error::{Result, TourError};
use crate::models::PointSet;

/// A dense, symmetric n×n Euclidean distance matrix stored in row-major order.
///
/// Built once from a [`PointSet`] and never mutated afterwards. Each unordered
/// pair is computed once and mirrored, so `get(i, j)` and `get(j, i)` return
/// the same stored value.
///
/// # Examples
///
/// ```
/// use tsp_seed::models::PointSet;
/// use tsp_seed::distance::DistanceMatrix;
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]);
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(1, 2) - 5.0).abs() < 1e-10);
/// assert!((dm.tour_length(&[0, 1, 2]).unwrap() - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix of a point set.
    ///
    /// Empty and single-point sets yield an empty or 1×1 zero matrix.
    pub fn from_points(points: &PointSet) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        let pts = points.points();
        for i in 0..n {
            for j in (i + 1)..n {
                let d = pts[i].distance_to(&pts[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        log::trace!("distance_matrix.build: size={n}");
        Self { data, size: n }
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance between `from` and `to`, checking both indices.
    pub fn try_get(&self, from: usize, to: usize) -> Result<f64> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.get(from, to))
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the row of distances from `from` to every location.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns an error unless `index` is a valid location.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(TourError::InvalidIndex {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Checks that `path` is a permutation of `0..size`.
    ///
    /// Out-of-range entries are reported as [`TourError::InvalidIndex`];
    /// duplicates and length mismatches as [`TourError::InvalidPermutation`].
    pub fn validate_permutation(&self, path: &[usize]) -> Result<()> {
        let mut seen = vec![false; self.size];
        for &idx in path {
            self.check_index(idx)?;
            if seen[idx] {
                return Err(TourError::InvalidPermutation {
                    reason: format!("index {idx} appears more than once"),
                });
            }
            seen[idx] = true;
        }
        if path.len() != self.size {
            return Err(TourError::InvalidPermutation {
                reason: format!("expected {} indices, found {}", self.size, path.len()),
            });
        }
        Ok(())
    }

    /// Computes the closed-cycle length of a permutation.
    ///
    /// The edge after the last element wraps back to the first.
    pub fn tour_length(&self, path: &[usize]) -> Result<f64> {
        self.validate_permutation(path)?;
        Ok(self.cycle_length(path))
    }

    /// Closed-cycle length without validation. Indices must be in range.
    pub(crate) fn cycle_length(&self, path: &[usize]) -> f64 {
        let n = path.len();
        (0..n).map(|i| self.get(path[i], path[(i + 1) % n])).sum()
    }

    /// Returns the nearest location to `from` whose `visited` flag is unset.
    ///
    /// Ties go to the lowest index. Returns `Ok(None)` when every location is
    /// visited. `visited` must hold one flag per location; a shorter mask
    /// reports its first missing index and a longer one reports `size` as
    /// [`TourError::InvalidIndex`].
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Result<Option<usize>> {
        self.check_index(from)?;
        if visited.len() < self.size {
            return Err(TourError::InvalidIndex {
                index: visited.len(),
                size: visited.len(),
            });
        }
        if visited.len() > self.size {
            return Err(TourError::InvalidIndex {
                index: self.size,
                size: self.size,
            });
        }

        let row = self.row(from);
        let mut best: Option<(usize, f64)> = None;
        for (i, (&d, &seen)) in row.iter().zip(visited).enumerate() {
            if seen {
                continue;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        Ok(best.map(|(i, _)| i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_points(&PointSet::from_coords(&[
            (0.0, 0.0),
            (0.0, 3.0),
            (4.0, 0.0),
        ]))
    }

    #[test]
    fn test_from_points() {
        let dm = triangle();
        assert_eq!(dm.size(), 3);
        let expected = [[0.0, 3.0, 4.0], [3.0, 0.0, 5.0], [4.0, 5.0, 0.0]];
        for (i, row) in expected.iter().enumerate() {
            for (j, &d) in row.iter().enumerate() {
                assert!((dm.get(i, j) - d).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_exact_symmetry_and_zero_diagonal() {
        let dm = DistanceMatrix::from_points(&PointSet::from_coords(&[
            (0.1, 0.7),
            (3.3, -2.9),
            (1.0 / 3.0, 5.5),
        ]));
        assert!(dm.is_symmetric(0.0));
        for i in 0..dm.size() {
            assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        let empty = DistanceMatrix::from_points(&PointSet::default());
        assert_eq!(empty.size(), 0);
        assert!(empty.is_empty());

        let single = DistanceMatrix::from_points(&PointSet::from_coords(&[(5.0, 5.0)]));
        assert_eq!(single.size(), 1);
        assert_eq!(single.get(0, 0), 0.0);
    }

    #[test]
    fn test_try_get_out_of_range() {
        let dm = triangle();
        assert!((dm.try_get(0, 2).expect("valid") - 4.0).abs() < 1e-10);
        assert_eq!(
            dm.try_get(0, 3),
            Err(TourError::InvalidIndex { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_tour_length_any_order() {
        let dm = triangle();
        for path in [[0, 1, 2], [0, 2, 1], [1, 0, 2], [2, 1, 0]] {
            assert!((dm.tour_length(&path).expect("valid") - 12.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_tour_length_empty_and_single() {
        let empty = DistanceMatrix::from_points(&PointSet::default());
        assert_eq!(empty.tour_length(&[]), Ok(0.0));
        let single = DistanceMatrix::from_points(&PointSet::from_coords(&[(1.0, 1.0)]));
        assert_eq!(single.tour_length(&[0]), Ok(0.0));
    }

    #[test]
    fn test_validate_permutation_errors() {
        let dm = triangle();
        assert!(dm.validate_permutation(&[2, 0, 1]).is_ok());
        assert!(matches!(
            dm.validate_permutation(&[0, 1, 5]),
            Err(TourError::InvalidIndex { index: 5, size: 3 })
        ));
        assert!(matches!(
            dm.validate_permutation(&[0, 1, 1]),
            Err(TourError::InvalidPermutation { .. })
        ));
        assert!(matches!(
            dm.validate_permutation(&[0, 1]),
            Err(TourError::InvalidPermutation { .. })
        ));
    }

    #[test]
    fn test_nearest_unvisited() {
        let dm = triangle();
        let mut visited = vec![true, false, false];
        assert_eq!(dm.nearest_unvisited(0, &visited), Ok(Some(1)));
        visited[1] = true;
        assert_eq!(dm.nearest_unvisited(0, &visited), Ok(Some(2)));
        visited[2] = true;
        assert_eq!(dm.nearest_unvisited(0, &visited), Ok(None));
    }

    #[test]
    fn test_nearest_unvisited_tie_prefers_lowest_index() {
        // 1 and 2 are both at distance 1 from 0.
        let dm = DistanceMatrix::from_points(&PointSet::from_coords(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (-1.0, 0.0),
        ]));
        let visited = vec![true, false, false];
        assert_eq!(dm.nearest_unvisited(0, &visited), Ok(Some(1)));
    }

    #[test]
    fn test_nearest_unvisited_mask_length_mismatch() {
        let dm = triangle();
        assert_eq!(
            dm.nearest_unvisited(0, &[true]),
            Err(TourError::InvalidIndex { index: 1, size: 1 })
        );
        assert_eq!(
            dm.nearest_unvisited(0, &[true, false, false, false]),
            Err(TourError::InvalidIndex { index: 3, size: 3 })
        );
    }

    #[test]
    fn test_nearest_unvisited_invalid_from() {
        let dm = triangle();
        assert_eq!(
            dm.nearest_unvisited(3, &[false, false, false]),
            Err(TourError::InvalidIndex { index: 3, size: 3 })
        );
    }
}
