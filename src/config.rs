use std::path::Path;

use serde::{Deserialize, Serialize};

/// All shape and collision parameters in one struct.
/// Serializable so presets can be saved next to island data, and
/// adjustable at runtime (for editor sliders).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShorelineConfig {
    // -- Extraction stage --
    /// Number of rays cast from the image centre.
    pub angular_steps: usize,
    /// Distance between samples along a ray, in pixels.
    pub march_step: f64,
    /// A sample is solid when its alpha is strictly above this value.
    pub alpha_threshold: u8,

    // -- Procedural fallback --
    /// Number of points on a generated outline.
    pub fallback_points: usize,
    /// Relative amplitude of the low-frequency (3 lobes) perturbation.
    pub fallback_low_amplitude: f64,
    /// Relative amplitude of the high-frequency (7 lobes) perturbation.
    pub fallback_high_amplitude: f64,

    // -- Smoothing / simplification --
    /// Blend factor toward the neighbour average. 0 = no smoothing.
    pub smooth_factor: f64,
    /// Number of smoothing passes over the loop.
    pub smooth_passes: usize,
    /// Minimum separation between kept outline points, in world units.
    pub simplify_tolerance: f64,

    // -- Circle approximation --
    /// Main circle radius as a fraction of the largest dimension.
    pub main_circle_fraction: f64,
    /// One dimension must exceed the other by this factor to count as elongated.
    pub aspect_ratio_threshold: f64,
    /// Side circle radius (elongated shapes) as a fraction of the smaller dimension.
    pub side_circle_fraction: f64,
    /// Corner circle radius (compact shapes) as a fraction of the smaller dimension.
    pub corner_circle_fraction: f64,
    /// Offset of secondary circles as a fraction of the matching dimension.
    pub secondary_offset_fraction: f64,
    /// Radius multiplier applied when two circles are merged.
    pub merge_growth: f64,

    // -- Collision --
    /// Margin added to every collision threshold, in world units.
    pub collision_buffer: f64,
    /// Speed multiplier applied when a mover is reverted.
    pub speed_damping: f64,
}

impl Default for ShorelineConfig {
    fn default() -> Self {
        Self {
            angular_steps: 128,
            march_step: 1.0,
            alpha_threshold: 128,
            fallback_points: 64,
            fallback_low_amplitude: 0.08,
            fallback_high_amplitude: 0.04,
            smooth_factor: 0.5,
            smooth_passes: 1,
            simplify_tolerance: 2.0,
            main_circle_fraction: 1.0 / 3.0,
            aspect_ratio_threshold: 1.3,
            side_circle_fraction: 0.25,
            corner_circle_fraction: 0.2,
            secondary_offset_fraction: 0.25,
            merge_growth: 1.2,
            collision_buffer: 12.0,
            speed_damping: 0.2,
        }
    }
}

impl ShorelineConfig {
    /// Same parameters with a different collision margin.
    pub fn with_buffer(mut self, buffer: f64) -> Self {
        self.collision_buffer = buffer;
        self
    }

    /// Load a config preset from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, crate::ShapeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config preset from disk.
    pub fn load(path: &Path) -> Result<Self, crate::ShapeError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}
