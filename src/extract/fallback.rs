//! Procedural outline for islands without usable raster data.

use std::f64::consts::TAU;

use kurbo::Point;

use crate::config::ShorelineConfig;
use crate::shape::OutlineShape;

const LOW_FREQUENCY: f64 = 3.0;
const HIGH_FREQUENCY: f64 = 7.0;

/// Generate an organic-looking closed outline around the origin.
///
/// A circle of `radius` perturbed by two sine harmonics. The phase is
/// derived from the radius, so the same radius always gives the same
/// outline while differently sized islands look different.
pub fn generate(radius: f64, config: &ShorelineConfig) -> OutlineShape {
    OutlineShape::from_loop(points(radius, config))
}

fn points(radius: f64, config: &ShorelineConfig) -> Vec<Point> {
    let n = config.fallback_points.max(3);
    let radius = if radius.is_finite() && radius > 0.0 { radius } else { 1.0 };
    let phase = radius * 0.1;

    (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            let wobble = config.fallback_low_amplitude * (LOW_FREQUENCY * angle + phase).sin()
                + config.fallback_high_amplitude * (HIGH_FREQUENCY * angle + 2.0 * phase).sin();
            let r = radius * (1.0 + wobble);
            Point::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}
