//! # tsp-seed
//!
//! Building blocks for approximating the Euclidean Traveling Salesman
//! Problem: a precomputed distance matrix, closed tours with cached lengths,
//! two construction heuristics, and a node-swap perturbation for
//! improvement searches.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointSet, Instance, Tour)
//! - [`distance`] — Dense distance matrix
//! - [`constructive`] — Construction heuristics (random shuffle, nearest neighbor)
//! - [`perturbation`] — Perturbation operators (two-node swap)
//! - [`random`] — Seeded random sources
//! - [`error`] — Error type shared by all fallible operations

pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;
pub mod perturbation;
pub mod random;

pub use error::{Result, TourError};
