//! Outline mode: distance to the closest polygon edge, plus an
//! inside-polygon override so movers that tunnel past the boundary are
//! still pushed out.

use kurbo::{Point, Vec2};

use super::{CollisionVerdict, ContactFeature, Mover};
use crate::geom::{closest_point_on_segment, point_in_polygon, unit_or, FALLBACK_PUSH};
use crate::shape::OutlineShape;

pub(super) fn resolve(
    mover: &Mover,
    center: Point,
    outline: &OutlineShape,
    buffer: f64,
) -> CollisionVerdict {
    if outline.len() < 3 {
        return CollisionVerdict::clear(mover.position());
    }

    // Work in the island's frame.
    let local = mover.position() - center.to_vec2();

    let mut best: Option<(f64, Point, usize, Point, Point)> = None;
    for (i, (a, b)) in outline.edges().enumerate() {
        let closest = closest_point_on_segment(local, a, b);
        let d = local.distance(closest);
        if best.map_or(true, |(bd, ..)| d < bd) {
            best = Some((d, closest, i, a, b));
        }
    }
    let Some((distance, closest, edge, a, b)) = best else {
        return CollisionVerdict::clear(mover.position());
    };

    let inside = point_in_polygon(local, outline.points());
    let collided = inside || distance < mover.radius + buffer;

    let push = if inside {
        unit_or(local.to_vec2(), FALLBACK_PUSH)
    } else {
        let delta = local - closest;
        if delta.hypot() > 0.0 {
            unit_or(delta, FALLBACK_PUSH)
        } else {
            outward_normal(a, b)
        }
    };

    CollisionVerdict {
        collided,
        distance,
        push,
        closest_point: closest + center.to_vec2(),
        feature: Some(ContactFeature::Edge(edge)),
        island: None,
    }
}

/// Unit normal of edge A→B pointing away from the local origin.
fn outward_normal(a: Point, b: Point) -> Vec2 {
    let d = b - a;
    let mid = a.midpoint(b).to_vec2();
    let n = Vec2::new(d.y, -d.x);
    let n = if n.dot(mid) < 0.0 { -n } else { n };
    unit_or(n, unit_or(mid, FALLBACK_PUSH))
}
