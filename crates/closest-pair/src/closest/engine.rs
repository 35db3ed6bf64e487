//! Divide-and-conquer recursion over parallel x/y index orderings.

use super::brute::{brute_over, strip_over, Cand};
use super::cfg::BASE_CASE_MAX;
use super::ClosestPair;
use crate::plane::Pt2;

/// Closest pair among the points named by `x_order` (ascending x) and `y_order`
/// (the same indices, ascending y).
///
/// Returns `None` when fewer than two points are named. Indices refer to
/// `points`; the returned pair has `i < j`.
pub fn closest_pair_sqr(
    points: &[Pt2],
    x_order: &[usize],
    y_order: &[usize],
) -> Option<ClosestPair> {
    debug_assert_eq!(x_order.len(), y_order.len(), "orderings must name the same points");
    debug_assert!(x_order.iter().all(|&i| i < points.len()));
    if x_order.len() < 2 {
        return None;
    }
    let mut in_left = vec![false; points.len()];
    let best = recurse(points, x_order, y_order, &mut in_left);
    debug_assert!(best.has_pair());
    Some(ClosestPair::from_indices(points, best.i, best.j))
}

/// `in_left` is scratch indexed by point index; all-false on entry and on return.
fn recurse(points: &[Pt2], xs: &[usize], ys: &[usize], in_left: &mut [bool]) -> Cand {
    let n = xs.len();
    if n <= BASE_CASE_MAX {
        return brute_over(points, xs, Cand::bound(f64::INFINITY));
    }

    let mid = n / 2;
    let (xl, xr) = xs.split_at(mid);
    // Split the y-ordering by membership in the x-halves, not by position:
    // ties in x would otherwise send a point to both sides or neither.
    for &i in xl {
        in_left[i] = true;
    }
    let (yl, yr): (Vec<usize>, Vec<usize>) = ys.iter().copied().partition(|&i| in_left[i]);
    for &i in xl {
        in_left[i] = false;
    }

    let left = recurse(points, xl, &yl, in_left);
    let right = recurse(points, xr, &yr, in_left);
    let best = left.min(right);

    // Squared units on both sides of the width test.
    let x_mid = points[xs[mid]].x;
    let strip: Vec<usize> = ys
        .iter()
        .copied()
        .filter(|&i| {
            let dx = points[i].x - x_mid;
            dx * dx < best.d2
        })
        .collect();
    strip_over(points, &strip, best)
}
