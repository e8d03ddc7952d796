use crate::config::ShorelineConfig;
use crate::shape::{Circle, CircleSet};

/// Greedily merge heavily overlapping circles.
///
/// Each circle is folded into the first already-accepted circle whose
/// centre lies closer than half their summed radii; the merged circle
/// sits at the midpoint with radius `max(r1, r2) × merge_growth`.
/// Never increases the count. Covered area is not guaranteed to shrink
/// or grow monotonically.
pub fn optimize_circles(set: &CircleSet, config: &ShorelineConfig) -> CircleSet {
    let mut accepted: Vec<Circle> = Vec::with_capacity(set.len());

    for &circle in set.iter() {
        let target = accepted.iter_mut().find(|a| {
            a.center().distance(circle.center()) < (a.radius + circle.radius) / 2.0
        });
        match target {
            Some(a) => {
                let center = a.center().midpoint(circle.center());
                *a = Circle::new(center, a.radius.max(circle.radius) * config.merge_growth);
            }
            None => accepted.push(circle),
        }
    }

    tracing::debug!(before = set.len(), after = accepted.len(), "circles optimized");
    CircleSet::new(accepted)
}
