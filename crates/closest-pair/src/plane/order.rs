use std::cmp::Ordering;

use super::types::{Axis, Pt2};

#[inline]
fn cmp_axis(axis: Axis, a: &Pt2, b: &Pt2) -> Ordering {
    axis.coord(a)
        .partial_cmp(&axis.coord(b))
        .unwrap_or(Ordering::Equal)
}

/// Copy of `points` sorted ascending along `axis`. The input is left untouched.
pub fn sort_by_axis(points: &[Pt2], axis: Axis) -> Vec<Pt2> {
    let mut out = points.to_vec();
    out.sort_unstable_by(|a, b| cmp_axis(axis, a, b));
    out
}

/// Indices into `points`, ordered ascending along `axis`.
///
/// Used by the divide-and-conquer engine: indices keep duplicate points distinguishable
/// when the y-ordering is partitioned by x-half membership.
pub fn order_by_axis(points: &[Pt2], axis: Axis) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..points.len()).collect();
    idx.sort_unstable_by(|&i, &j| cmp_axis(axis, &points[i], &points[j]));
    idx
}
