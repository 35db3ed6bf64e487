//! Curated API surface for the CLI and benches.
//!
//! Prefer these re-exports over reaching into submodules; internal layout may
//! move around without notice.

// Points and orderings
pub use crate::plane::{dist_sqr, order_by_axis, points_from_tuples, sort_by_axis, Axis, Pt2};
// Random clouds
pub use crate::plane::rand::{draw_point_cloud, CloudCfg, PointCount, ReplayToken as CloudReplay};
// Closest pair
pub use crate::closest::{
    closest_pair, closest_pair_brute, closest_pair_distance, closest_pair_distance_brute,
    closest_pair_sqr, min_dist_sqr_brute, min_dist_sqr_strip, ClosestPair, PairError,
};

/// Which algorithm a caller wants to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algo {
    /// O(n log n) divide and conquer.
    DivideConquer,
    /// O(n²) all-pairs reference.
    Brute,
}

impl Algo {
    pub fn name(self) -> &'static str {
        match self {
            Algo::DivideConquer => "dc",
            Algo::Brute => "brute",
        }
    }

    /// Dispatch to the matching entry point.
    pub fn solve(self, points: &[Pt2]) -> Result<ClosestPair, PairError> {
        match self {
            Algo::DivideConquer => closest_pair(points),
            Algo::Brute => closest_pair_brute(points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn algos_agree_on_seeded_cloud() {
        let mut rng = StdRng::seed_from_u64(42);
        let pts: Vec<Pt2> = (0..200)
            .map(|_| Pt2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)))
            .collect();
        let dc = Algo::DivideConquer.solve(&pts).unwrap();
        let bf = Algo::Brute.solve(&pts).unwrap();
        assert_eq!(dc.dist_sqr, bf.dist_sqr);
    }

    #[test]
    fn algo_names_are_cli_values() {
        assert_eq!(Algo::DivideConquer.name(), "dc");
        assert_eq!(Algo::Brute.name(), "brute");
    }
}
