//! Closed tours over a point set.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use super::{Point, PointSet};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::perturbation::node_swap;

/// A closed visiting order over every point, with its cached length.
///
/// The path is always a permutation of `0..N` for the matrix it was built
/// against, and `length()` always equals the recomputed cycle length. The
/// path can only be replaced as a whole, which refreshes the length in the
/// same call.
///
/// # Examples
///
/// ```
/// use tsp_seed::models::{PointSet, Tour};
/// use tsp_seed::distance::DistanceMatrix;
///
/// let points = PointSet::from_coords(&[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]);
/// let dm = DistanceMatrix::from_points(&points);
///
/// let mut tour = Tour::new(&dm, vec![0, 1, 2]).unwrap();
/// assert!((tour.length() - 12.0).abs() < 1e-10);
/// assert_eq!(tour.fitness(), 0.0);
///
/// tour.update_path(vec![2, 1, 0]).unwrap();
/// assert_eq!(tour.path(), &[2, 1, 0]);
/// assert!((tour.length() - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Tour<'a> {
    #[serde(skip)]
    distances: &'a DistanceMatrix,
    path: Vec<usize>,
    length: f64,
    fitness: f64,
}

impl<'a> Tour<'a> {
    /// Creates a tour from a permutation of `0..distances.size()`.
    pub fn new(distances: &'a DistanceMatrix, path: Vec<usize>) -> Result<Self> {
        let length = distances.tour_length(&path)?;
        Ok(Self {
            distances,
            path,
            length,
            fitness: 0.0,
        })
    }

    /// Replaces the path and recomputes the length.
    ///
    /// On error the tour is left unchanged.
    pub fn update_path(&mut self, path: Vec<usize>) -> Result<()> {
        let length = self.distances.tour_length(&path)?;
        self.path = path;
        self.length = length;
        Ok(())
    }

    /// Returns a new tour with two random positions swapped.
    ///
    /// The fitness slot of the new tour starts at its default value.
    pub fn perturbed<R: Rng>(&self, rng: &mut R) -> Result<Tour<'a>> {
        let path = node_swap(&self.path, rng)?;
        let length = self.distances.cycle_length(&path);
        Ok(Tour {
            distances: self.distances,
            path,
            length,
            fitness: 0.0,
        })
    }

    /// The visiting order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Total closed-cycle length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the tour visits no points.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The matrix this tour is measured against.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// Recomputes the cycle length from the path.
    pub fn recompute_length(&self) -> f64 {
        self.distances.cycle_length(&self.path)
    }

    /// Score reserved for a selection or acceptance scheme. Defaults to `0.0`.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Sets the fitness score.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Consumes the tour, returning its path.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }

    /// Returns the coordinates along the tour, closed by repeating the first.
    ///
    /// Fails if `points` does not cover every index in the path.
    pub fn polyline(&self, points: &PointSet) -> Result<Vec<Point>> {
        let mut line = Vec::with_capacity(self.path.len() + 1);
        for &idx in &self.path {
            let p = points.get(idx).ok_or(TourError::InvalidIndex {
                index: idx,
                size: points.len(),
            })?;
            line.push(*p);
        }
        if let Some(&first) = line.first() {
            line.push(first);
        }
        Ok(line)
    }
}

impl fmt::Display for Tour<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-node route, distance = {}",
            self.path.len(),
            self.length
        )
    }
}
