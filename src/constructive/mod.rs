//! Constructive heuristics for building initial tours.
//!
//! - [`random_permutation`] — Uniform shuffle of all points, O(n)
//! - [`nearest_neighbor`] — Greedy nearest-neighbor walk, O(n²)
//! - [`Heuristic`] — Configurable choice between the two

mod heuristic;
mod nearest_neighbor;
mod random;

pub use heuristic::Heuristic;
pub use nearest_neighbor::nearest_neighbor;
pub use random::random_permutation;
