//! Selectable construction heuristic.

use serde::{Deserialize, Serialize};

use super::{nearest_neighbor, random_permutation};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{Instance, Tour};
use crate::random::create_rng;

/// A construction heuristic together with its scalar parameters.
///
/// Deserializable so a driver can pick the heuristic from configuration:
///
/// ```
/// use tsp_seed::constructive::Heuristic;
/// use tsp_seed::models::{Instance, PointSet};
///
/// let instance = Instance::new(PointSet::from_coords(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
/// let heuristic = Heuristic::Greedy { start: Some(0), seed: 0 };
/// let tour = heuristic.build(&instance).unwrap();
/// assert_eq!(tour.path(), &[0, 2, 3, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Heuristic {
    /// Uniformly shuffled permutation.
    Random {
        /// Seed for the shuffle.
        #[serde(default)]
        seed: u64,
    },
    /// Nearest-neighbor walk.
    Greedy {
        /// First point; random when absent.
        #[serde(default)]
        start: Option<usize>,
        /// Seed used to draw the start point when `start` is absent.
        #[serde(default)]
        seed: u64,
    },
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Greedy {
            start: None,
            seed: 0,
        }
    }
}

impl Heuristic {
    /// Short name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Random { .. } => "random",
            Heuristic::Greedy { .. } => "greedy",
        }
    }

    /// Produces a permutation of `0..distances.size()`.
    pub fn permutation(&self, distances: &DistanceMatrix) -> Result<Vec<usize>> {
        match *self {
            Heuristic::Random { seed } => {
                Ok(random_permutation(distances.size(), &mut create_rng(seed)))
            }
            Heuristic::Greedy { start, seed } => {
                nearest_neighbor(distances, start, &mut create_rng(seed))
            }
        }
    }

    /// Builds a tour over `instance`.
    pub fn build<'a>(&self, instance: &'a Instance) -> Result<Tour<'a>> {
        let path = self.permutation(instance.distances())?;
        let tour = instance.tour(path)?;
        log::debug!(
            "construct: heuristic={} n={} length={:.3}",
            self.name(),
            tour.len(),
            tour.length()
        );
        Ok(tour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TourError;
    use crate::models::PointSet;

    fn instance() -> Instance {
        Instance::new(PointSet::from_coords(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (5.0, 5.0),
        ]))
    }

    #[test]
    fn test_default_is_greedy() {
        assert_eq!(Heuristic::default().name(), "greedy");
    }

    #[test]
    fn test_build_random() {
        let inst = instance();
        let a = Heuristic::Random { seed: 4 }.build(&inst).expect("valid");
        let b = Heuristic::Random { seed: 4 }.build(&inst).expect("valid");
        assert_eq!(a.path(), b.path());
        assert!(inst.distances().validate_permutation(a.path()).is_ok());
    }

    #[test]
    fn test_build_greedy_random_start() {
        let inst = instance();
        let tour = Heuristic::default().build(&inst).expect("valid");
        assert_eq!(tour.len(), 5);
        assert!((tour.length() - tour.recompute_length()).abs() < 1e-12);
    }

    #[test]
    fn test_build_greedy_bad_start() {
        let inst = instance();
        let err = Heuristic::Greedy {
            start: Some(9),
            seed: 0,
        }
        .build(&inst)
        .unwrap_err();
        assert_eq!(err, TourError::InvalidIndex { index: 9, size: 5 });
    }

    #[test]
    fn test_serde_round_trip() {
        let h: Heuristic =
            serde_json::from_str(r#"{"kind":"greedy","start":88}"#).expect("valid json");
        assert_eq!(
            h,
            Heuristic::Greedy {
                start: Some(88),
                seed: 0
            }
        );
        let h: Heuristic = serde_json::from_str(r#"{"kind":"random","seed":1}"#).expect("valid");
        assert_eq!(h, Heuristic::Random { seed: 1 });
        let json = serde_json::to_string(&h).expect("serializable");
        assert_eq!(json, r#"{"kind":"random","seed":1}"#);
    }
}
