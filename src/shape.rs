//! Island shape representations.
//!
//! An island holds exactly one of two collision shapes: an explicit
//! boundary polygon ([`OutlineShape`]) or a set of covering circles
//! ([`CircleSet`]). All coordinates are relative to the island centre.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::circles::{build_circles, optimize_circles, CircleSource};
use crate::config::ShorelineConfig;
use crate::error::ShapeError;
use crate::extract::{extract_shape, fallback};
use crate::raster::RasterMask;

/// A boundary point, relative to the shape centre.
pub type BoundaryPoint = Point;

/// Axis-aligned bounds of an outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Tight bounds around `points`. `None` when `points` is empty.
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.iter().skip(1).fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

/// A closed boundary polygon. The last point connects back to the first.
///
/// Always holds at least 3 points, and `bounds` always encloses them tightly.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineShape {
    points: Vec<BoundaryPoint>,
    bounds: Bounds,
}

impl OutlineShape {
    pub fn new(points: Vec<BoundaryPoint>) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::DegenerateShape(points.len()));
        }
        let bounds = Bounds::enclosing(&points).ok_or(ShapeError::DegenerateShape(0))?;
        Ok(Self { points, bounds })
    }

    /// Build from a loop already known to hold at least 3 points.
    pub(crate) fn from_loop(points: Vec<BoundaryPoint>) -> Self {
        debug_assert!(points.len() >= 3);
        let bounds = Bounds::enclosing(&points).unwrap_or(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        });
        Self { points, bounds }
    }

    pub fn points(&self) -> &[BoundaryPoint] {
        &self.points
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges as (start, end) pairs, including the closing edge last → first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Move one point (drag-edit). Bounds are recomputed.
    pub fn set_point(&mut self, index: usize, to: BoundaryPoint) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p = to;
                if let Some(b) = Bounds::enclosing(&self.points) {
                    self.bounds = b;
                }
                true
            }
            None => false,
        }
    }
}

/// A covering circle, offset from the island centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            x: center.x,
            y: center.y,
            radius,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Unordered collection of covering circles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleSet {
    pub circles: Vec<Circle>,
}

impl CircleSet {
    pub fn new(circles: Vec<Circle>) -> Self {
        Self { circles }
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
        self.circles.iter()
    }
}

impl FromIterator<Circle> for CircleSet {
    fn from_iter<I: IntoIterator<Item = Circle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// The collision shape an island currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum IslandShape {
    Outline(OutlineShape),
    Circles(CircleSet),
}

/// An island in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Island {
    /// World position of the island centre.
    pub center: Point,
    pub shape: IslandShape,
    /// Nominal radius; also the fallback collision radius for an empty circle set.
    pub base_radius: f64,
}

impl Island {
    pub fn with_outline(center: Point, outline: OutlineShape, base_radius: f64) -> Self {
        Self {
            center,
            shape: IslandShape::Outline(outline),
            base_radius,
        }
    }

    pub fn with_circles(center: Point, circles: CircleSet, base_radius: f64) -> Self {
        Self {
            center,
            shape: IslandShape::Circles(circles),
            base_radius,
        }
    }

    /// An island with a procedurally generated outline of `radius`.
    pub fn generated(center: Point, radius: f64, config: &ShorelineConfig) -> Self {
        Self::with_outline(center, fallback::generate(radius, config), radius)
    }

    /// Regenerate the outline from `raster` (or procedurally when absent).
    pub fn reset_outline(&mut self, raster: Option<&dyn RasterMask>, config: &ShorelineConfig) {
        self.shape = IslandShape::Outline(extract_shape(raster, self.base_radius, config));
    }

    /// Rebuild the circle set from the current outline, or from the base
    /// radius when the island has no outline.
    pub fn reset_circles(&mut self, optimize: bool, config: &ShorelineConfig) {
        let circles = match &self.shape {
            IslandShape::Outline(outline) => build_circles(CircleSource::Outline(outline), 1.0, config),
            IslandShape::Circles(_) => {
                let d = self.base_radius * 2.0;
                build_circles(CircleSource::Size { width: d, height: d }, 1.0, config)
            }
        };
        let circles = if optimize {
            optimize_circles(&circles, config)
        } else {
            circles
        };
        self.shape = IslandShape::Circles(circles);
    }

    pub fn move_outline_point(&mut self, index: usize, to: Point) -> bool {
        match &mut self.shape {
            IslandShape::Outline(outline) => outline.set_point(index, to),
            IslandShape::Circles(_) => false,
        }
    }

    pub fn move_circle(&mut self, index: usize, to: Point) -> bool {
        match self.circle_mut(index) {
            Some(c) => {
                c.x = to.x;
                c.y = to.y;
                true
            }
            None => false,
        }
    }

    /// Resize one circle. Non-positive radii are rejected.
    pub fn resize_circle(&mut self, index: usize, radius: f64) -> bool {
        if radius.is_nan() || radius <= 0.0 {
            return false;
        }
        match self.circle_mut(index) {
            Some(c) => {
                c.radius = radius;
                true
            }
            None => false,
        }
    }

    pub fn add_circle(&mut self, circle: Circle) -> bool {
        match &mut self.shape {
            IslandShape::Circles(set) if circle.radius > 0.0 => {
                set.circles.push(circle);
                true
            }
            _ => false,
        }
    }

    pub fn remove_circle(&mut self, index: usize) -> Option<Circle> {
        match &mut self.shape {
            IslandShape::Circles(set) if index < set.len() => Some(set.circles.remove(index)),
            _ => None,
        }
    }

    /// Largest distance from the centre reached by the collision shape.
    pub fn bounding_radius(&self) -> f64 {
        match &self.shape {
            IslandShape::Outline(outline) => outline
                .points()
                .iter()
                .map(|p| p.to_vec2().hypot())
                .fold(0.0, f64::max),
            IslandShape::Circles(set) if set.is_empty() => self.base_radius,
            IslandShape::Circles(set) => set
                .iter()
                .map(|c| Vec2::new(c.x, c.y).hypot() + c.radius)
                .fold(0.0, f64::max),
        }
    }

    fn circle_mut(&mut self, index: usize) -> Option<&mut Circle> {
        match &mut self.shape {
            IslandShape::Circles(set) => set.circles.get_mut(index),
            IslandShape::Outline(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> OutlineShape {
        OutlineShape::new(vec![
            Point::new(0.0, -10.0),
            Point::new(10.0, 10.0),
            Point::new(-10.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn outline_rejects_fewer_than_three_points() {
        let err = OutlineShape::new(vec![Point::ZERO, Point::new(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, ShapeError::DegenerateShape(2)));
    }

    #[test]
    fn edges_wrap_around() {
        let outline = triangle();
        let edges: Vec<_> = outline.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (Point::new(-10.0, 10.0), Point::new(0.0, -10.0)));
    }

    #[test]
    fn dragging_a_point_keeps_bounds_tight() {
        let mut island = Island::with_outline(Point::ZERO, triangle(), 10.0);
        assert!(island.move_outline_point(1, Point::new(30.0, 10.0)));
        let IslandShape::Outline(outline) = &island.shape else {
            panic!("expected outline");
        };
        assert_eq!(outline.bounds().max_x, 30.0);
        assert!(!island.move_outline_point(7, Point::ZERO));
    }

    #[test]
    fn circle_edits_only_apply_to_circle_sets() {
        let mut island = Island::with_circles(Point::ZERO, CircleSet::default(), 40.0);
        assert!(island.add_circle(Circle::new(Point::new(5.0, 0.0), 10.0)));
        assert!(!island.add_circle(Circle::new(Point::ZERO, 0.0)));
        assert!(island.resize_circle(0, 20.0));
        assert!(!island.resize_circle(0, -1.0));
        assert!(island.move_circle(0, Point::new(10.0, 0.0)));
        assert_eq!(island.bounding_radius(), 30.0);
        assert!(island.remove_circle(0).is_some());
        assert_eq!(island.bounding_radius(), 40.0);

        let mut outline_island = Island::with_outline(Point::ZERO, triangle(), 10.0);
        assert!(!outline_island.add_circle(Circle::new(Point::ZERO, 5.0)));
    }

    #[test]
    fn reset_circles_converts_outline() {
        let config = ShorelineConfig::default();
        let mut island = Island::generated(Point::new(100.0, 100.0), 80.0, &config);
        island.reset_circles(false, &config);
        match &island.shape {
            IslandShape::Circles(set) => assert!(set.len() >= 3),
            IslandShape::Outline(_) => panic!("expected circles"),
        }
    }

    #[test]
    fn reset_outline_scans_raster_or_regenerates() {
        let config = ShorelineConfig::default();
        // Opaque disc of radius 30 in a 64px mask; radius 32 keeps pixel scale.
        let disc = image::GrayAlphaImage::from_fn(64, 64, |x, y| {
            let (dx, dy) = (x as f64 + 0.5 - 32.0, y as f64 + 0.5 - 32.0);
            let a = if dx.hypot(dy) <= 30.0 { 255 } else { 0 };
            image::LumaA([0, a])
        });
        let mut island = Island::with_circles(Point::new(5.0, 5.0), CircleSet::default(), 32.0);
        island.reset_outline(Some(&disc as &dyn RasterMask), &config);
        assert!(matches!(island.shape, IslandShape::Outline(ref o) if o.len() >= 3));
        let r = island.bounding_radius();
        assert!((26.0..=32.0).contains(&r), "bounding radius {r}");

        island.reset_outline(None, &config);
        assert_eq!(island, Island::generated(Point::new(5.0, 5.0), 32.0, &config));
    }
}
