//! Property tests for the geometry primitives and the resolver.

use proptest::prelude::*;
use shoreline::extract::{simplify::simplify, smooth::smooth};
use shoreline::kurbo::Point;
use shoreline::{
    check_collision, optimize_circles, point_in_polygon, point_segment_distance, Circle,
    CircleSet, Island, Mover, OutlineShape, ShorelineConfig,
};

fn point() -> impl Strategy<Value = Point> {
    (-500.0..500.0f64, -500.0..500.0f64).prop_map(|(x, y)| Point::new(x, y))
}

fn points(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point(), min..max)
}

/// A star-shaped polygon around the origin: never self-intersecting.
fn star_polygon() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(10.0..200.0f64, 3..40).prop_map(|radii| {
        let n = radii.len();
        radii
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let a = std::f64::consts::TAU * i as f64 / n as f64;
                Point::new(r * a.cos(), r * a.sin())
            })
            .collect()
    })
}

fn circle() -> impl Strategy<Value = Circle> {
    (point(), 1.0..150.0f64).prop_map(|(c, r)| Circle::new(c, r))
}

proptest! {
    #[test]
    fn smoothing_with_zero_factor_is_identity(pts in points(0, 50)) {
        prop_assert_eq!(smooth(&pts, 0.0), pts);
    }

    #[test]
    fn simplify_with_zero_tolerance_keeps_count(pts in points(0, 50)) {
        prop_assert_eq!(simplify(&pts, 0.0).len(), pts.len());
    }

    #[test]
    fn simplify_keeps_first_and_at_least_two(pts in points(2, 50), tol in 0.0..2000.0f64) {
        let out = simplify(&pts, tol);
        prop_assert_eq!(out[0], pts[0]);
        prop_assert!(out.len() >= 2);
        prop_assert!(out.len() <= pts.len());
    }

    #[test]
    fn segment_distance_non_negative(p in point(), a in point(), b in point()) {
        let d = point_segment_distance(p, a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= p.distance(a) + 1e-9);
        prop_assert!(d <= p.distance(b) + 1e-9);
    }

    #[test]
    fn degenerate_segment_matches_point_distance(p in point(), a in point()) {
        prop_assert_eq!(point_segment_distance(p, a, a), p.distance(a));
    }

    #[test]
    fn containment_invariant_under_reversal(poly in points(3, 20), p in point()) {
        let reversed: Vec<Point> = poly.iter().rev().copied().collect();
        prop_assert_eq!(point_in_polygon(p, &poly), point_in_polygon(p, &reversed));
    }

    #[test]
    fn outline_push_is_unit_when_colliding(
        poly in star_polygon(),
        p in point(),
        radius in 1.0..60.0f64,
        buffer in 0.0..15.0f64,
    ) {
        let outline = OutlineShape::new(poly).unwrap();
        let island = Island::with_outline(Point::new(30.0, -20.0), outline, 100.0);
        let config = ShorelineConfig::default().with_buffer(buffer);
        let verdict = check_collision(&Mover::new(p.x, p.y, radius, 1.0), &[island], &config);
        if verdict.collided {
            prop_assert!((verdict.push.hypot() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn outline_push_is_unit_on_vertices_and_centre(poly in star_polygon(), pick in 0usize..40) {
        let outline = OutlineShape::new(poly.clone()).unwrap();
        let island = Island::with_outline(Point::ZERO, outline, 100.0);
        let config = ShorelineConfig::default().with_buffer(0.0);
        for at in [poly[pick % poly.len()], Point::ZERO] {
            let verdict = check_collision(&Mover::new(at.x, at.y, 5.0, 1.0), &[island.clone()], &config);
            prop_assert!(verdict.collided);
            prop_assert!((verdict.push.hypot() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn circle_push_is_unit_when_colliding(
        circles in prop::collection::vec(circle(), 0..8),
        p in point(),
        radius in 1.0..60.0f64,
    ) {
        let island = Island::with_circles(Point::new(-10.0, 5.0), CircleSet::new(circles), 80.0);
        let config = ShorelineConfig::default();
        let verdict = check_collision(&Mover::new(p.x, p.y, radius, 1.0), &[island], &config);
        if verdict.collided {
            prop_assert!((verdict.push.hypot() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn optimizer_never_adds_circles(circles in prop::collection::vec(circle(), 0..20)) {
        let set = CircleSet::new(circles);
        let out = optimize_circles(&set, &ShorelineConfig::default());
        prop_assert!(out.len() <= set.len());
        prop_assert!(out.iter().all(|c| c.radius > 0.0));
    }

    #[test]
    fn separated_pair_is_left_alone(a in circle(), gap in 0.1..100.0f64) {
        let b = Circle::new(Point::new(a.x + 2.0 * a.radius + gap, a.y), a.radius);
        let set = CircleSet::new(vec![a, b]);
        prop_assert_eq!(optimize_circles(&set, &ShorelineConfig::default()), set);
    }
}
