//! Domain model types for the Euclidean TSP.
//!
//! Provides points and ordered point sets, the instance that owns a point set
//! together with its distance matrix, and closed tours with cached lengths.

mod instance;
mod point;
mod tour;

pub use instance::Instance;
pub use point::{Point, PointSet};
pub use tour::Tour;
