//! Circle approximation: cover an island footprint with a few circles.
//!
//! One main circle sits on the centroid. Elongated shapes get two side
//! circles along their long axis; compact shapes get four corner
//! circles. This is a covering heuristic, not an exact decomposition.

mod optimize;

pub use optimize::optimize_circles;

use geo::{Centroid, LineString, Polygon};
use kurbo::{Point, Vec2};

use crate::config::ShorelineConfig;
use crate::shape::{Circle, CircleSet, OutlineShape};

/// What to build circles from.
#[derive(Debug, Clone, Copy)]
pub enum CircleSource<'a> {
    /// An island outline; its bounds and area centroid are used.
    Outline(&'a OutlineShape),
    /// A bare footprint size (e.g. image dimensions) centred on the origin.
    Size { width: f64, height: f64 },
}

impl<'a> From<&'a OutlineShape> for CircleSource<'a> {
    fn from(outline: &'a OutlineShape) -> Self {
        CircleSource::Outline(outline)
    }
}

/// Build a covering circle set. `scale` multiplies every source dimension
/// (e.g. pixels → world units).
///
/// A footprint without positive extent yields an empty set, which the
/// resolver treats as a single circle of the island's base radius.
pub fn build_circles(
    source: CircleSource<'_>,
    scale: f64,
    config: &ShorelineConfig,
) -> CircleSet {
    let (width, height, centroid) = match source {
        CircleSource::Outline(outline) => {
            let b = outline.bounds();
            let c = outline_centroid(outline);
            (b.width() * scale, b.height() * scale, (c.to_vec2() * scale).to_point())
        }
        CircleSource::Size { width, height } => (width * scale, height * scale, Point::ZERO),
    };

    let largest = width.max(height);
    if !(largest.is_finite() && largest > 0.0) {
        tracing::debug!(width, height, "footprint has no extent, no circles built");
        return CircleSet::default();
    }
    let smaller = width.min(height);

    let mut circles = vec![Circle::new(centroid, largest * config.main_circle_fraction)];

    let offset_x = width * config.secondary_offset_fraction;
    let offset_y = height * config.secondary_offset_fraction;
    let elongation = config.aspect_ratio_threshold;

    let (radius, offsets): (f64, Vec<Vec2>) = if width > elongation * height {
        (
            smaller * config.side_circle_fraction,
            vec![Vec2::new(-offset_x, 0.0), Vec2::new(offset_x, 0.0)],
        )
    } else if height > elongation * width {
        (
            smaller * config.side_circle_fraction,
            vec![Vec2::new(0.0, -offset_y), Vec2::new(0.0, offset_y)],
        )
    } else {
        (
            smaller * config.corner_circle_fraction,
            vec![
                Vec2::new(-offset_x, -offset_y),
                Vec2::new(offset_x, -offset_y),
                Vec2::new(offset_x, offset_y),
                Vec2::new(-offset_x, offset_y),
            ],
        )
    };

    // A zero-thickness footprint only gets its main circle.
    if radius > 0.0 {
        circles.extend(offsets.into_iter().map(|o| Circle::new(centroid + o, radius)));
    }

    tracing::debug!(count = circles.len(), width, height, "circles built");
    CircleSet::new(circles)
}

/// Area centroid of the outline polygon, or the bounds centre for
/// polygons without area.
fn outline_centroid(outline: &OutlineShape) -> Point {
    let ring: LineString<f64> = outline.points().iter().map(|p| (p.x, p.y)).collect();
    Polygon::new(ring, vec![])
        .centroid()
        .map(|c| Point::new(c.x(), c.y()))
        .filter(|c| c.x.is_finite() && c.y.is_finite())
        .unwrap_or_else(|| outline.bounds().center())
}
