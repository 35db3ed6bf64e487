//! Closest pair of points: brute force and O(n log n) divide and conquer.
//!
//! Purpose
//! - `closest_pair_distance` is the main entry: validate, sort once by x and
//!   once by y, recurse, take the square root once.
//! - `closest_pair_brute` is the O(n²) reference used by tests, benches, and
//!   `cli --algo brute`.
//!
//! Algorithm
//! - Split the x-ordering at `n / 2`, partition the y-ordering by membership,
//!   recurse on both halves, then scan the y-ordered strip of points with
//!   `(x − x_mid)² < best²` against a few successors each.
//! - Sub-problems of at most 3 points go to brute force.
//!
//! Code cross-refs: `plane::{dist_sqr, order_by_axis}`, `brute::{min_dist_sqr_brute, min_dist_sqr_strip}`

mod brute;
mod cfg;
mod engine;

use std::fmt;

use crate::plane::{dist_sqr, order_by_axis, Axis, Pt2};

pub use brute::{min_dist_sqr_brute, min_dist_sqr_strip};
pub use engine::closest_pair_sqr;

/// Errors surfaced at the input boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PairError {
    /// Fewer than two points: no pair exists.
    TooFewPoints { count: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairError::TooFewPoints { count } => {
                write!(f, "need at least 2 points for a closest pair, got {count}")
            }
            PairError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for PairError {}

/// A closest pair: indices into the input slice (`i < j`), their coordinates,
/// and the squared distance between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub i: usize,
    pub j: usize,
    pub a: Pt2,
    pub b: Pt2,
    pub dist_sqr: f64,
}

impl ClosestPair {
    pub(crate) fn from_indices(points: &[Pt2], i: usize, j: usize) -> Self {
        let (a, b) = (points[i], points[j]);
        Self {
            i,
            j,
            a,
            b,
            dist_sqr: dist_sqr(&a, &b),
        }
    }

    /// Euclidean distance between the pair.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.dist_sqr.sqrt()
    }
}

fn validate(points: &[Pt2]) -> Result<(), PairError> {
    if points.len() < 2 {
        return Err(PairError::TooFewPoints {
            count: points.len(),
        });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(PairError::NonFinite { index });
    }
    Ok(())
}

/// Closest pair by divide and conquer, O(n log n).
pub fn closest_pair(points: &[Pt2]) -> Result<ClosestPair, PairError> {
    validate(points)?;
    let xs = order_by_axis(points, Axis::X);
    let ys = order_by_axis(points, Axis::Y);
    closest_pair_sqr(points, &xs, &ys).ok_or(PairError::TooFewPoints {
        count: points.len(),
    })
}

/// Minimum Euclidean distance between any two of `points`.
///
/// Duplicates yield `0.0`. Fewer than two points is an error, never `inf`.
pub fn closest_pair_distance(points: &[Pt2]) -> Result<f64, PairError> {
    closest_pair(points).map(|p| p.distance())
}

/// Closest pair by checking all pairs, O(n²).
pub fn closest_pair_brute(points: &[Pt2]) -> Result<ClosestPair, PairError> {
    validate(points)?;
    let idx: Vec<usize> = (0..points.len()).collect();
    let best = brute::brute_over(points, &idx, brute::Cand::bound(f64::INFINITY));
    Ok(ClosestPair::from_indices(points, best.i, best.j))
}

/// Brute-force counterpart of [`closest_pair_distance`].
pub fn closest_pair_distance_brute(points: &[Pt2]) -> Result<f64, PairError> {
    closest_pair_brute(points).map(|p| p.distance())
}
