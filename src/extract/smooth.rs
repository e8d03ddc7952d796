//! Neighbour-average smoothing of closed point loops.

use kurbo::Point;

/// One smoothing pass over a closed loop.
///
/// Each point moves toward the midpoint of its two neighbours by
/// `factor`: 0 leaves the loop unchanged, 1 replaces each point with
/// its neighbours' midpoint.
pub fn smooth(points: &[Point], factor: f64) -> Vec<Point> {
    let n = points.len();
    if n < 3 || factor == 0.0 {
        return points.to_vec();
    }
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            points[i].lerp(prev.midpoint(next), factor)
        })
        .collect()
}

/// Apply `passes` rounds of [`smooth`].
pub fn smooth_closed(points: &[Point], factor: f64, passes: usize) -> Vec<Point> {
    let mut pts = points.to_vec();
    for _ in 0..passes {
        pts = smooth(&pts, factor);
    }
    pts
}
