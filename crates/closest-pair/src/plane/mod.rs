//! Planar points: type, squared metric, axis orderings.
//!
//! Purpose
//! - One point type (`Pt2 = nalgebra::Point2<f64>`) shared by every algorithm.
//! - Non-destructive orderings: callers' slices are never reordered.
//!
//! Code cross-refs: `closest::{closest_pair_sqr, min_dist_sqr_brute}`

mod metric;
mod order;
pub mod rand;
mod types;

pub use metric::dist_sqr;
pub use order::{order_by_axis, sort_by_axis};
pub use types::{points_from_tuples, Axis, Pt2};

#[cfg(test)]
mod tests;
