use thiserror::Error;

/// Errors raised while loading island geometry.
///
/// Extraction and collision never surface these to the caller; they are
/// logged and recovered from locally. Only loading and record handling
/// return them.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShapeError {
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("pixel access unavailable at ({x}, {y})")]
    PixelAccess { x: u32, y: u32 },

    #[error("raster mask has no solid pixels")]
    EmptyMask,

    #[error("outline needs at least 3 points, got {0}")]
    DegenerateShape(usize),

    #[error("invalid island record: {0}")]
    Record(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
