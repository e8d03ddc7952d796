//! Persisted island records.
//!
//! The on-disk form carries both possible shape fields; only one needs
//! to be populated. On load a valid outline wins, then a non-empty
//! circle list, and with neither the island collides as a single circle
//! of its `radius`.

use std::path::Path;

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::shape::{Bounds, Circle, CircleSet, Island, IslandShape, OutlineShape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IslandRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(default)]
    pub collision_circles: Vec<Circle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<OutlineRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineRecord {
    pub points: Vec<PointRecord>,
    /// Informational only; bounds are recomputed from `points` on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
}

impl IslandRecord {
    /// Snapshot an island. Only the representation it holds is written.
    pub fn from_island(name: &str, island: &Island) -> Self {
        let (collision_circles, outline) = match &island.shape {
            IslandShape::Outline(shape) => (
                Vec::new(),
                Some(OutlineRecord {
                    points: shape
                        .points()
                        .iter()
                        .map(|p| PointRecord { x: p.x, y: p.y })
                        .collect(),
                    bounds: Some(shape.bounds()),
                }),
            ),
            IslandShape::Circles(set) => (set.circles.clone(), None),
        };
        Self {
            name: name.to_string(),
            x: island.center.x,
            y: island.center.y,
            radius: island.base_radius,
            collision_circles,
            outline,
        }
    }

    /// Rebuild the island this record describes.
    pub fn to_island(&self) -> Island {
        let center = Point::new(self.x, self.y);

        if let Some(outline) = &self.outline {
            let points = outline.points.iter().map(|p| Point::new(p.x, p.y)).collect();
            match OutlineShape::new(points) {
                Ok(shape) => return Island::with_outline(center, shape, self.radius),
                Err(e) => tracing::warn!(island = %self.name, error = %e, "ignoring stored outline"),
            }
        }

        let circles: CircleSet = self
            .collision_circles
            .iter()
            .copied()
            .filter(|c| c.radius > 0.0)
            .collect();
        if circles.len() < self.collision_circles.len() {
            tracing::warn!(
                island = %self.name,
                dropped = self.collision_circles.len() - circles.len(),
                "dropping circles without positive radius"
            );
        }
        Island::with_circles(center, circles, self.radius)
    }
}

/// Parse a JSON array of island records.
pub fn parse_records(json: &str) -> Result<Vec<IslandRecord>, ShapeError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of island records from disk.
pub fn load_records(path: &Path) -> Result<Vec<IslandRecord>, ShapeError> {
    parse_records(&std::fs::read_to_string(path)?)
}

/// Serialize island records as pretty-printed JSON.
pub fn records_to_json(records: &[IslandRecord]) -> Result<String, ShapeError> {
    Ok(serde_json::to_string_pretty(records)?)
}
