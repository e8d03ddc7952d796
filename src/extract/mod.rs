//! Extraction pipeline: raster mask → island outline.
//!
//! 1. Radial boundary scan of the alpha mask
//! 2. Neighbour-average smoothing
//! 3. Minimum-separation thinning
//!
//! Any failure along the way (no raster, unreadable pixels, an empty
//! mask, or a loop that thins below 3 points) falls back to a
//! procedural outline. Extraction never fails.

pub mod fallback;
pub mod radial;
pub mod simplify;
pub mod smooth;

use rayon::prelude::*;

use crate::config::ShorelineConfig;
use crate::raster::RasterMask;
use crate::shape::OutlineShape;

/// Build an island outline of roughly `radius` from an optional raster.
pub fn extract_shape(
    raster: Option<&dyn RasterMask>,
    radius: f64,
    config: &ShorelineConfig,
) -> OutlineShape {
    let Some(mask) = raster else {
        tracing::debug!(radius, "no raster, generating outline");
        return fallback::generate(radius, config);
    };

    let raw = match radial::scan(mask, radius, config) {
        Ok(points) => points,
        Err(e) => {
            tracing::warn!(error = %e, "boundary extraction unavailable, generating outline");
            return fallback::generate(radius, config);
        }
    };

    let smoothed = smooth::smooth_closed(&raw, config.smooth_factor, config.smooth_passes);
    let thinned = simplify::simplify(&smoothed, config.simplify_tolerance);
    tracing::debug!(raw = raw.len(), kept = thinned.len(), "outline extracted");

    match OutlineShape::new(thinned) {
        Ok(outline) => outline,
        Err(e) => {
            tracing::warn!(error = %e, "extracted outline degenerate, generating outline");
            fallback::generate(radius, config)
        }
    }
}

/// One island to extract during a load phase.
#[derive(Clone, Copy)]
pub struct ExtractJob<'a> {
    pub raster: Option<&'a (dyn RasterMask + Sync)>,
    pub radius: f64,
}

/// Extract many outlines at once, spread across threads with rayon.
///
/// Meant for the setup phase: results come back in job order.
pub fn extract_shapes(jobs: &[ExtractJob<'_>], config: &ShorelineConfig) -> Vec<OutlineShape> {
    jobs.par_iter()
        .map(|job| {
            let raster = job.raster.map(|r| r as &dyn RasterMask);
            extract_shape(raster, job.radius, config)
        })
        .collect()
}
