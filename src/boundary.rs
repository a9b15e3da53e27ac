//! Land/water boundary extraction
//!
//! Walks the water mask and emits one world-space segment for every cell
//! edge separating water from land or from the grid boundary. Segments are
//! deliberately left unmerged: one per cell edge, so the published contract
//! stays a per-edge predicate and the physics side can consume them blindly.

use crate::island::WorldPoint;
use crate::tilemap::Tilemap;

/// A straight collision edge between two world-space points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundarySegment {
    pub a: WorldPoint,
    pub b: WorldPoint,
}

impl BoundarySegment {
    pub fn new(a: WorldPoint, b: WorldPoint) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f32 {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// External physics collaborator. The island feeds every boundary segment to
/// it exactly once, at construction; the core keeps no handle afterwards.
pub trait CollisionSink {
    fn add_static_edge(&mut self, a: WorldPoint, b: WorldPoint);
}

/// Collect boundary segments for a water mask.
///
/// For each water cell the four axis neighbors are examined; a neighbor that
/// is out of bounds or not water contributes the shared edge. Each segment
/// is `cell_size` long and axis-aligned.
pub fn extract_boundaries(
    is_water: &Tilemap<bool>,
    cell_size: f32,
    origin_x: f32,
    origin_y: f32,
) -> Vec<BoundarySegment> {
    let cols = is_water.width;
    let rows = is_water.height;
    let mut segments = Vec::new();

    for y in 0..rows {
        for x in 0..cols {
            if !*is_water.get(x, y) {
                continue;
            }

            let x0 = origin_x + x as f32 * cell_size;
            let y0 = origin_y + y as f32 * cell_size;
            let x1 = x0 + cell_size;
            let y1 = y0 + cell_size;

            // Top
            if y + 1 >= rows || !*is_water.get(x, y + 1) {
                segments.push(BoundarySegment::new(
                    WorldPoint::new(x0, y1),
                    WorldPoint::new(x1, y1),
                ));
            }
            // Bottom
            if y == 0 || !*is_water.get(x, y - 1) {
                segments.push(BoundarySegment::new(
                    WorldPoint::new(x0, y0),
                    WorldPoint::new(x1, y0),
                ));
            }
            // Left
            if x == 0 || !*is_water.get(x - 1, y) {
                segments.push(BoundarySegment::new(
                    WorldPoint::new(x0, y0),
                    WorldPoint::new(x0, y1),
                ));
            }
            // Right
            if x + 1 >= cols || !*is_water.get(x + 1, y) {
                segments.push(BoundarySegment::new(
                    WorldPoint::new(x1, y0),
                    WorldPoint::new(x1, y1),
                ));
            }
        }
    }

    segments
}
