//! Raster alpha masks: the read-only pixel source for boundary extraction.

use std::path::Path;

use image::{GrayAlphaImage, ImageReader, RgbaImage};

use crate::error::ShapeError;

/// Per-pixel alpha access over an externally owned image.
///
/// Access may fail (e.g. a tainted canvas or an out-of-range read); the
/// extractor treats any failure as "pixels unavailable" and falls back.
pub trait RasterMask {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Alpha of pixel (x, y), with y=0 at the top of the image.
    fn alpha(&self, x: u32, y: u32) -> Result<u8, ShapeError>;
}

impl RasterMask for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn alpha(&self, x: u32, y: u32) -> Result<u8, ShapeError> {
        self.get_pixel_checked(x, y)
            .map(|p| p.0[3])
            .ok_or(ShapeError::PixelAccess { x, y })
    }
}

impl RasterMask for GrayAlphaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn alpha(&self, x: u32, y: u32) -> Result<u8, ShapeError> {
        self.get_pixel_checked(x, y)
            .map(|p| p.0[1])
            .ok_or(ShapeError::PixelAccess { x, y })
    }
}

/// Load an island image as an RGBA buffer so its alpha channel can be scanned.
pub fn load_mask(path: &Path) -> Result<RgbaImage, ShapeError> {
    let img = ImageReader::open(path)
        .map_err(|e| ShapeError::ImageLoad(e.to_string()))?
        .decode()
        .map_err(|e| ShapeError::ImageLoad(e.to_string()))?
        .into_rgba8();
    tracing::debug!(width = img.width(), height = img.height(), "loaded island mask");
    Ok(img)
}
