//! Pairwise distances between points.
//!
//! Provides a dense Euclidean distance matrix built once per point set.

mod matrix;

pub use matrix::DistanceMatrix;
