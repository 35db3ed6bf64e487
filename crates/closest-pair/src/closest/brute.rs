//! All-pairs minimum and the bounded strip scan.

use super::cfg::STRIP_WINDOW;
use crate::plane::{dist_sqr, Pt2};

/// Best pair seen so far, as indices into the caller's point slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Cand {
    pub d2: f64,
    pub i: usize,
    pub j: usize,
}

impl Cand {
    /// No pair yet; `d2` acts as the upper bound.
    #[inline]
    pub fn bound(d2: f64) -> Self {
        Self {
            d2,
            i: usize::MAX,
            j: usize::MAX,
        }
    }

    #[inline]
    pub fn has_pair(&self) -> bool {
        self.i != usize::MAX
    }

    #[inline]
    fn offer(&mut self, points: &[Pt2], i: usize, j: usize) {
        let d2 = dist_sqr(&points[i], &points[j]);
        // Equality only claims a pair when none is held yet (overflowed `inf` distances).
        if d2 < self.d2 || (d2 == self.d2 && !self.has_pair()) {
            self.d2 = d2;
            self.i = i.min(j);
            self.j = i.max(j);
        }
    }

    /// Smaller of the two; ties keep `self`.
    #[inline]
    pub fn min(self, other: Cand) -> Cand {
        if other.d2 < self.d2 {
            other
        } else {
            self
        }
    }
}

/// All pairs among `idx`, improving on `best`.
pub(crate) fn brute_over(points: &[Pt2], idx: &[usize], mut best: Cand) -> Cand {
    for (k, &i) in idx.iter().enumerate() {
        for &j in &idx[k + 1..] {
            best.offer(points, i, j);
        }
    }
    best
}

/// Strip scan over a y-ordered index list, improving on `best`.
///
/// Each point is compared with at most `STRIP_WINDOW` successors, and the inner
/// loop stops as soon as the y-gap alone reaches the current best.
pub(crate) fn strip_over(points: &[Pt2], strip: &[usize], mut best: Cand) -> Cand {
    for (k, &i) in strip.iter().enumerate() {
        let py = points[i].y;
        for &j in strip[k + 1..].iter().take(STRIP_WINDOW) {
            let dy = points[j].y - py;
            if dy * dy >= best.d2 {
                break;
            }
            best.offer(points, i, j);
        }
    }
    best
}

/// Minimum squared distance over all pairs of `points`, never exceeding `upper`.
///
/// Pass `f64::INFINITY` for no bound; fewer than two points return `upper` unchanged.
pub fn min_dist_sqr_brute(points: &[Pt2], upper: f64) -> f64 {
    let idx: Vec<usize> = (0..points.len()).collect();
    brute_over(points, &idx, Cand::bound(upper)).d2
}

/// Minimum squared distance within a y-ordered strip, never exceeding `upper`.
///
/// Only pairs that are close in y-order are examined; this is exact for strips
/// narrower than `sqrt(upper)` on each side of a dividing line whose halves
/// have no pair closer than `sqrt(upper)`.
pub fn min_dist_sqr_strip(points: &[Pt2], upper: f64) -> f64 {
    let idx: Vec<usize> = (0..points.len()).collect();
    strip_over(points, &idx, Cand::bound(upper)).d2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::points_from_tuples;

    #[test]
    fn brute_finds_min_and_respects_bound() {
        let pts = points_from_tuples(&[(0.0, 0.0), (3.0, 4.0), (1.0, 1.0)]);
        assert_eq!(min_dist_sqr_brute(&pts, f64::INFINITY), 2.0);
        assert_eq!(min_dist_sqr_brute(&pts, 1.5), 1.5);
        assert_eq!(min_dist_sqr_brute(&pts[..1], f64::INFINITY), f64::INFINITY);
        assert_eq!(min_dist_sqr_brute(&[], 7.0), 7.0);
    }

    #[test]
    fn brute_tracks_witness_indices() {
        let pts = points_from_tuples(&[(10.0, 0.0), (0.0, 0.0), (10.0, 0.5)]);
        let best = brute_over(&pts, &[0, 1, 2], Cand::bound(f64::INFINITY));
        assert!(best.has_pair());
        assert_eq!((best.i, best.j), (0, 2));
        assert_eq!(best.d2, 0.25);
    }

    #[test]
    fn strip_scan_early_exit_on_y_gap() {
        // y-ordered; only (0,1)-(0.1,1.2) is close.
        let pts = points_from_tuples(&[(0.0, 0.0), (0.0, 1.0), (0.1, 1.2), (0.0, 5.0)]);
        let d2 = min_dist_sqr_strip(&pts, 1.0);
        assert!((d2 - 0.05).abs() < 1e-12);
        // Bound already tighter than anything in the strip.
        assert_eq!(min_dist_sqr_strip(&pts, 0.01), 0.01);
    }

    #[test]
    fn strip_scan_reaches_past_first_six() {
        // Close pair sits among the first few points of the strip.
        let pts = points_from_tuples(&[
            (0.0, 0.0),
            (0.01, 0.01),
            (0.5, 0.9),
            (-0.5, 1.8),
            (0.5, 2.7),
            (-0.5, 3.6),
            (0.5, 4.5),
            (-0.5, 5.4),
        ]);
        assert!((min_dist_sqr_strip(&pts, 1.0) - 0.0002).abs() < 1e-12);
    }
}
