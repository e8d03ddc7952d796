//! Minimum-separation thinning of point loops.

use kurbo::Point;

/// Forward greedy thinning: a point is kept only when it lies at least
/// `tolerance` away from the previously kept point.
///
/// The first point is always kept, and the result never drops below two
/// points when the input has two or more.
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    let mut kept = vec![first];
    for &p in &points[1..] {
        let last = kept[kept.len() - 1];
        if p.distance(last) >= tolerance {
            kept.push(p);
        }
    }
    if kept.len() < 2 {
        if let Some(&last) = points.last().filter(|_| points.len() >= 2) {
            kept.push(last);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tolerance_keeps_everything() {
        let pts = vec![Point::ZERO, Point::ZERO, Point::new(1.0, 0.0)];
        assert_eq!(simplify(&pts, 0.0).len(), 3);
    }

    #[test]
    fn drops_near_duplicates() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.5, 0.0),
            Point::new(4.0, 0.0),
        ];
        let out = simplify(&pts, 2.0);
        assert_eq!(out, vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(4.0, 0.0)]);
    }

    #[test]
    fn never_below_two_points() {
        let pts = vec![Point::ZERO, Point::new(0.1, 0.0), Point::new(0.2, 0.0)];
        let out = simplify(&pts, 100.0);
        assert_eq!(out, vec![Point::ZERO, Point::new(0.2, 0.0)]);
        assert_eq!(simplify(&[Point::ZERO], 100.0).len(), 1);
    }
}
