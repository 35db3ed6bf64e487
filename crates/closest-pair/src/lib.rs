//! Closest pair of points in the plane.
//!
//! Layout
//! - `plane`: point type, squared metric, axis orderings, random point clouds.
//! - `closest`: brute force, strip scan, and the O(n log n) divide-and-conquer engine.
//! - `api`: curated re-exports for callers (CLI, benches).
//!
//! All internal comparisons use squared distances; only the public distance
//! entry points take a square root, once.

pub mod api;
pub mod closest;
pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use closest::{closest_pair, closest_pair_distance, ClosestPair, PairError};
pub use plane::Pt2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::closest::{
        closest_pair, closest_pair_brute, closest_pair_distance, closest_pair_distance_brute,
        ClosestPair, PairError,
    };
    pub use crate::plane::rand::{draw_point_cloud, CloudCfg, PointCount, ReplayToken};
    pub use crate::plane::{dist_sqr, points_from_tuples, sort_by_axis, Axis, Pt2};
}
