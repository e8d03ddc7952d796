//! Circle-set mode: centre-distance tests against each covering circle.

use kurbo::Point;

use super::{CollisionVerdict, ContactFeature, Mover};
use crate::geom::{unit_or, FALLBACK_PUSH};
use crate::shape::{Circle, CircleSet, Island};

pub(super) fn resolve(
    mover: &Mover,
    island: &Island,
    set: &CircleSet,
    buffer: f64,
) -> CollisionVerdict {
    let base = [Circle::new(Point::ZERO, island.base_radius)];
    let (circles, base_only) = if set.is_empty() {
        (&base[..], true)
    } else {
        (&set.circles[..], false)
    };

    let pos = mover.position();
    // Non-colliding queries still report the circle with the smallest gap.
    let mut nearest: Option<(f64, CollisionVerdict)> = None;

    for (i, circle) in circles.iter().enumerate() {
        let center = island.center + circle.center().to_vec2();
        let delta = pos - center;
        let distance = delta.hypot();
        let push = unit_or(delta, FALLBACK_PUSH);
        let feature = if base_only {
            ContactFeature::BaseCircle
        } else {
            ContactFeature::Circle(i)
        };
        let verdict = CollisionVerdict {
            collided: distance < circle.radius + mover.radius + buffer,
            distance,
            push,
            closest_point: center + push * circle.radius,
            feature: Some(feature),
            island: None,
        };
        if verdict.collided {
            return verdict;
        }
        let gap = distance - circle.radius;
        if nearest.map_or(true, |(g, _)| gap < g) {
            nearest = Some((gap, verdict));
        }
    }

    nearest.map_or_else(|| CollisionVerdict::clear(pos), |(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    fn island(circles: Vec<Circle>) -> Island {
        Island::with_circles(Point::ZERO, CircleSet::new(circles), 100.0)
    }

    fn check(mover: &Mover, island: &Island, buffer: f64) -> CollisionVerdict {
        match &island.shape {
            crate::shape::IslandShape::Circles(set) => resolve(mover, island, set, buffer),
            crate::shape::IslandShape::Outline(_) => unreachable!(),
        }
    }

    #[test]
    fn first_hit_short_circuits() {
        let isl = island(vec![
            Circle::new(Point::new(-30.0, 0.0), 40.0),
            Circle::new(Point::new(30.0, 0.0), 40.0),
        ]);
        let mover = Mover::new(0.0, 0.0, 5.0, 1.0);
        let v = check(&mover, &isl, 0.0);
        assert!(v.collided);
        assert_eq!(v.feature, Some(ContactFeature::Circle(0)));
        assert_eq!(v.push, Vec2::new(1.0, 0.0));
        assert_eq!(v.closest_point, Point::new(10.0, 0.0));
    }

    #[test]
    fn coincident_centres_use_fallback_push() {
        let isl = island(vec![Circle::new(Point::new(10.0, 10.0), 20.0)]);
        let mover = Mover::new(10.0, 10.0, 5.0, 1.0);
        let v = check(&mover, &isl, 0.0);
        assert!(v.collided);
        assert_eq!(v.push, FALLBACK_PUSH);
    }

    #[test]
    fn empty_set_uses_base_radius() {
        let isl = island(vec![]);
        let hit = check(&Mover::new(0.0, 105.0, 10.0, 1.0), &isl, 0.0);
        assert!(hit.collided);
        assert_eq!(hit.feature, Some(ContactFeature::BaseCircle));
        assert_eq!(hit.push, Vec2::new(0.0, 1.0));
        let miss = check(&Mover::new(0.0, 111.0, 10.0, 1.0), &isl, 0.0);
        assert!(!miss.collided);
    }

    #[test]
    fn miss_reports_nearest_circle() {
        let isl = island(vec![
            Circle::new(Point::new(-100.0, 0.0), 10.0),
            Circle::new(Point::new(100.0, 0.0), 50.0),
        ]);
        let v = check(&Mover::new(200.0, 0.0, 5.0, 1.0), &isl, 0.0);
        assert!(!v.collided);
        assert_eq!(v.feature, Some(ContactFeature::Circle(1)));
        assert_eq!(v.distance, 100.0);
    }
}
