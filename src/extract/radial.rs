//! Radial boundary scan over a raster alpha mask.
//!
//! Rays are cast from the image centre at evenly spaced angles. Along
//! each ray we march outward and keep the last solid sample seen before
//! the first solid → transparent transition. A ray that stays solid up
//! to the image edge ends at the last in-bounds sample.

use std::f64::consts::TAU;

use kurbo::Point;

use crate::config::ShorelineConfig;
use crate::error::ShapeError;
use crate::raster::RasterMask;

/// Scan `mask` and return boundary points in world units relative to the
/// image centre, scaled so the larger image half-extent maps to `radius`.
///
/// Rays that never touch a solid sample contribute no point. Fails with
/// `PixelAccess` when a read fails, or `EmptyMask` when no ray hits land.
pub fn scan(
    mask: &dyn RasterMask,
    radius: f64,
    config: &ShorelineConfig,
) -> Result<Vec<Point>, ShapeError> {
    let (w, h) = (mask.width(), mask.height());
    if w == 0 || h == 0 {
        return Err(ShapeError::EmptyMask);
    }

    let cx = w as f64 / 2.0;
    let cy = h as f64 / 2.0;
    let half_extent = w.max(h) as f64 / 2.0;
    let scale = radius / half_extent;
    let step = if config.march_step > 0.0 { config.march_step } else { 1.0 };
    let steps = config.angular_steps.max(3);

    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        let angle = TAU * i as f64 / steps as f64;
        let (sin, cos) = angle.sin_cos();
        if let Some(r) = march(mask, cx, cy, cos, sin, step, config.alpha_threshold)? {
            points.push(Point::new(r * cos * scale, r * sin * scale));
        }
    }

    tracing::debug!(rays = steps, hits = points.len(), "radial scan");
    if points.is_empty() {
        return Err(ShapeError::EmptyMask);
    }
    Ok(points)
}

/// March along one ray. Returns the distance of the boundary sample, if any.
fn march(
    mask: &dyn RasterMask,
    cx: f64,
    cy: f64,
    cos: f64,
    sin: f64,
    step: f64,
    threshold: u8,
) -> Result<Option<f64>, ShapeError> {
    let (w, h) = (mask.width() as f64, mask.height() as f64);
    let mut last_solid = None;
    let mut r = 0.0;
    loop {
        let px = cx + r * cos;
        let py = cy + r * sin;
        if px < 0.0 || py < 0.0 || px >= w || py >= h {
            break;
        }
        let solid = mask.alpha(px as u32, py as u32)? > threshold;
        if solid {
            last_solid = Some(r);
        } else if last_solid.is_some() {
            break;
        }
        r += step;
    }
    Ok(last_solid)
}
