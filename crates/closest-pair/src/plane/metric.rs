use super::types::Pt2;

/// Squared Euclidean distance `(px−qx)² + (py−qy)²`.
#[inline]
pub fn dist_sqr(p: &Pt2, q: &Pt2) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx * dx + dy * dy
}
