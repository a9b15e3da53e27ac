//! Island generation library
//!
//! Deterministic seeded island synthesis: fractal value-noise heights under
//! a radial mask, threshold terrain bands, dirt/gravel patch decoration,
//! water-boundary collision segments, and read-only spatial queries.

pub mod boundary;
pub mod heightmap;
pub mod island;
pub mod map_export;
pub mod noise;
pub mod patches;
pub mod stats;
pub mod tilemap;

pub use boundary::{BoundarySegment, CollisionSink};
pub use heightmap::{HeightParams, TerrainType};
pub use island::{Island, NearestLand, WorldBounds, WorldPoint};
pub use patches::PatchKind;
pub use stats::IslandStats;
pub use tilemap::Tilemap;
