//! Collision resolution of movers against island shapes.
//!
//! One resolver for both shape representations: the island's shape tag
//! is matched once here and handed to the outline or circle-set
//! routine. A world scan walks islands in order and stops at the first
//! collision.

mod circles;
mod outline;

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::ShorelineConfig;
use crate::shape::{Island, IslandShape};

/// A moving body (typically the player's ship), in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mover {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
}

impl Mover {
    pub fn new(x: f64, y: f64, radius: f64, speed: f64) -> Self {
        Self { x, y, radius, speed }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }
}

/// Which part of an island produced the closest contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactFeature {
    /// Outline edge from point `i` to point `i + 1` (wrapping).
    Edge(usize),
    /// Circle `i` of the island's circle set.
    Circle(usize),
    /// The implicit base-radius circle of an island with an empty set.
    BaseCircle,
}

/// Result of one collision query.
///
/// `push` is a unit vector whenever `collided` is true. `distance` is the
/// distance to the closest outline edge in outline mode, and the
/// centre-to-centre distance in circle mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionVerdict {
    pub collided: bool,
    pub distance: f64,
    pub push: Vec2,
    /// Closest point on the island boundary, in world space.
    pub closest_point: Point,
    pub feature: Option<ContactFeature>,
    /// Index of the island in the scanned list (world scans only).
    pub island: Option<usize>,
}

impl CollisionVerdict {
    /// No contact at all.
    pub fn clear(at: Point) -> Self {
        Self {
            collided: false,
            distance: f64::INFINITY,
            push: Vec2::ZERO,
            closest_point: at,
            feature: None,
            island: None,
        }
    }
}

/// Check a mover against a single island.
pub fn check_island(mover: &Mover, island: &Island, config: &ShorelineConfig) -> CollisionVerdict {
    match &island.shape {
        IslandShape::Outline(shape) => outline::resolve(mover, island.center, shape, config.collision_buffer),
        IslandShape::Circles(set) => circles::resolve(mover, island, set, config.collision_buffer),
    }
}

/// Check a mover against every island in order; the first collision wins.
///
/// There is no search for the closest island: islands are not expected
/// to overlap.
pub fn check_collision(mover: &Mover, islands: &[Island], config: &ShorelineConfig) -> CollisionVerdict {
    for (i, island) in islands.iter().enumerate() {
        let verdict = check_island(mover, island, config);
        if verdict.collided {
            tracing::trace!(island = i, distance = verdict.distance, "collision");
            return CollisionVerdict {
                island: Some(i),
                ..verdict
            };
        }
    }
    CollisionVerdict::clear(mover.position())
}
