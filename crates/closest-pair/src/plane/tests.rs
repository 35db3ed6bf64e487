use super::*;

#[test]
fn dist_sqr_axis_and_diagonal() {
    let o = Pt2::new(0.0, 0.0);
    assert_eq!(dist_sqr(&o, &Pt2::new(3.0, 4.0)), 25.0);
    assert_eq!(dist_sqr(&Pt2::new(2.0, 3.0), &Pt2::new(3.0, 4.0)), 2.0);
    // Symmetric and zero on identical points.
    let p = Pt2::new(-1.5, 7.25);
    let q = Pt2::new(4.0, -2.0);
    assert_eq!(dist_sqr(&p, &q), dist_sqr(&q, &p));
    assert_eq!(dist_sqr(&p, &p), 0.0);
}

#[test]
fn sort_is_non_destructive() {
    let pts = points_from_tuples(&[(3.0, 1.0), (1.0, 3.0), (2.0, 2.0)]);
    let before = pts.clone();
    let by_x = sort_by_axis(&pts, Axis::X);
    let by_y = sort_by_axis(&pts, Axis::Y);
    assert_eq!(pts, before);
    let xs: Vec<f64> = by_x.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = by_y.iter().map(|p| p.y).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    assert_eq!(ys, vec![1.0, 2.0, 3.0]);
}

#[test]
fn order_indices_match_sorted_copy() {
    let pts = points_from_tuples(&[(5.0, 0.0), (-1.0, 9.0), (2.0, -4.0), (0.0, 0.5)]);
    for axis in [Axis::X, Axis::Y] {
        let idx = order_by_axis(&pts, axis);
        let sorted = sort_by_axis(&pts, axis);
        let via_idx: Vec<Pt2> = idx.iter().map(|&i| pts[i]).collect();
        assert_eq!(via_idx, sorted);
    }
}

#[test]
fn empty_orderings() {
    assert!(sort_by_axis(&[], Axis::X).is_empty());
    assert!(order_by_axis(&[], Axis::Y).is_empty());
}
