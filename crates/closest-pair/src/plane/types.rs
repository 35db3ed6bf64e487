//! Basic planar types.

/// A point in the plane. Plain `Copy` value; two points are "the same" only by coordinates.
pub type Pt2 = nalgebra::Point2<f64>;

/// Coordinate axis used for orderings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn coord(self, p: &Pt2) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Build points from `(x, y)` tuples.
pub fn points_from_tuples(raw: &[(f64, f64)]) -> Vec<Pt2> {
    raw.iter().map(|&(x, y)| Pt2::new(x, y)).collect()
}
