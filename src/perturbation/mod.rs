//! Perturbation operators for tour improvement searches.
//!
//! - [`node_swap`] — Exchange the contents of two random positions

mod swap;

pub use swap::node_swap;
