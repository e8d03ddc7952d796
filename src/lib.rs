//! shoreline: island images → collision geometry for a sailing game.
//!
//! Turns a raster island image into a collision shape (a boundary
//! polygon or a handful of covering circles) and resolves moving ships
//! against those shapes every simulation tick.
//!
//! # Example
//!
//! ```
//! use shoreline::{check_collision, Island, Mover, PositionRecovery, ShorelineConfig};
//! use shoreline::kurbo::Point;
//!
//! let config = ShorelineConfig::default();
//! // No raster at hand: a procedural outline of radius 120.
//! let islands = vec![Island::generated(Point::new(500.0, 300.0), 120.0, &config)];
//!
//! let mut ship = Mover::new(100.0, 300.0, 12.0, 5.0);
//! let mut recovery = PositionRecovery::new(&ship);
//!
//! ship.x = 470.0; // sails straight into the island
//! let verdict = recovery.step(&mut ship, &islands, &config, |_| {});
//! assert!(verdict.collided);
//! assert_eq!(ship.x, 100.0);
//! assert!(!check_collision(&ship, &islands, &config).collided);
//! ```

#![forbid(unsafe_code)]

mod geom;

pub mod circles;
pub mod collision;
pub mod config;
pub mod error;
pub mod extract;
pub mod raster;
pub mod record;
pub mod recovery;
pub mod shape;

// Re-export kurbo so downstream users get the same Point/Vec2 types.
pub use kurbo;

pub use circles::{build_circles, optimize_circles, CircleSource};
pub use collision::{check_collision, check_island, CollisionVerdict, ContactFeature, Mover};
pub use config::ShorelineConfig;
pub use error::ShapeError;
pub use extract::{extract_shape, extract_shapes, ExtractJob};
pub use geom::{closest_point_on_segment, point_in_polygon, point_segment_distance};
pub use raster::{load_mask, RasterMask};
pub use record::{load_records, parse_records, records_to_json, IslandRecord};
pub use recovery::PositionRecovery;
pub use shape::{BoundaryPoint, Bounds, Circle, CircleSet, Island, IslandShape, OutlineShape};
