//! Shared geometry utilities.

use kurbo::{Point, Vec2};

/// Push direction used when no meaningful direction exists
/// (mover exactly on a circle centre or on the island origin).
pub const FALLBACK_PUSH: Vec2 = Vec2::new(1.0, 0.0);

/// Closest point to `p` on segment A→B (projection clamped to [0, 1]).
///
/// A degenerate segment (A == B) yields A.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Distance from `p` to segment A→B. Always >= 0.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    p.distance(closest_point_on_segment(p, a, b))
}

/// Even-odd ray-casting containment test against a closed polygon.
///
/// The result does not depend on the winding direction of `polygon`.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        // Evaluate each edge bottom-up so both windings round identically.
        let (lo, hi) = if polygon[i].y <= polygon[j].y {
            (polygon[i], polygon[j])
        } else {
            (polygon[j], polygon[i])
        };
        if (lo.y > p.y) != (hi.y > p.y) {
            let x_cross = lo.x + (p.y - lo.y) / (hi.y - lo.y) * (hi.x - lo.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Normalize `v`, or return `fallback` when `v` has no usable length.
pub fn unit_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let len = v.hypot();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        fallback
    }
}
