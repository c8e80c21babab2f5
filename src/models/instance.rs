//! A point set paired with its distance matrix.

use std::fmt;

use super::{PointSet, Tour};
use crate::distance::DistanceMatrix;
use crate::error::Result;

/// A TSP instance: the points and the distance matrix derived from them.
///
/// Both are fixed at construction. Tours borrow the matrix, so any number of
/// independent tours can share one instance.
///
/// # Examples
///
/// ```
/// use tsp_seed::models::{Instance, PointSet};
///
/// let instance = Instance::new(PointSet::from_coords(&[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]));
/// assert_eq!(instance.to_string(), "3-node map");
///
/// let tour = instance.tour(vec![1, 0, 2]).unwrap();
/// assert!((tour.length() - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    points: PointSet,
    distances: DistanceMatrix,
}

impl Instance {
    /// Builds the distance matrix for `points`.
    pub fn new(points: PointSet) -> Self {
        let distances = DistanceMatrix::from_points(&points);
        Self { points, distances }
    }

    /// Parses `x,y` lines and builds an instance from them.
    pub fn from_csv(input: &str) -> Result<Self> {
        Ok(Self::new(PointSet::parse_csv(input)?))
    }

    /// The points, in index order.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// The pairwise distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the instance has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Creates a tour over this instance from a permutation.
    pub fn tour(&self, path: Vec<usize>) -> Result<Tour<'_>> {
        Tour::new(&self.distances, path)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-node map", self.points.len())
    }
}
