//! Island data container and spatial queries
//!
//! Bundles every generated layer (heights, water/grass masks, patches,
//! boundary segments) behind a read-only query surface. The island is built
//! once, synchronously, and never mutated afterwards, so gameplay systems
//! can query it every frame without synchronization.

use crate::boundary::{self, BoundarySegment, CollisionSink};
use crate::heightmap::{self, HeightParams, TerrainType, BEACH_T};
use crate::patches::{self, PatchKind};
use crate::tilemap::Tilemap;

/// Margin above the beach threshold a nearest-land result must clear, so
/// spawned entities never stand right on the shoreline.
const LAND_SAFETY_MARGIN: f32 = 0.01;

/// A position in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    pub const ORIGIN: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// World-space rectangle covered by the island grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Result of a nearest-land search. The search can exhaust its radius; when
/// it does, the caller gets the fixed world-origin fallback, tagged so it is
/// distinguishable from a genuine hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NearestLand {
    /// A walkable land cell was found; this is its world-space center.
    Found(WorldPoint),
    /// No land within the search radius; fixed fallback point.
    Fallback(WorldPoint),
}

impl NearestLand {
    /// Collapse to a point, for callers that accept the fallback as-is.
    pub fn point(&self) -> WorldPoint {
        match self {
            NearestLand::Found(p) | NearestLand::Fallback(p) => *p,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, NearestLand::Fallback(_))
    }
}

/// All generated island data bundled together.
pub struct Island {
    /// Grid width in cells
    cols: usize,
    /// Grid height in cells
    rows: usize,
    /// World units per cell
    cell_size: f32,
    /// Seed used for generation (allows bit-identical recreation)
    seed: u64,
    /// World x of the grid's lower-left corner (grid is centered on origin)
    origin_x: f32,
    /// World y of the grid's lower-left corner
    origin_y: f32,
    /// Normalized height per cell (0..1, after the island mask)
    heights: Tilemap<f32>,
    /// Water mask derived from the heights
    is_water: Tilemap<bool>,
    /// Grass-band mask (patch-eligible cells)
    is_grass: Tilemap<bool>,
    /// Patch overlay (dirt / gravel / none)
    patches: Tilemap<PatchKind>,
    /// Unmerged water boundary segments, one per separating cell edge
    segments: Vec<BoundarySegment>,
}

impl Island {
    /// Generate an island. One blocking pass: height field, masks, patches,
    /// boundary segments. `cols`/`rows` must be positive and `cell_size` > 0.
    pub fn generate(cols: usize, rows: usize, cell_size: f32, seed: u64, params: &HeightParams) -> Self {
        assert!(cols > 0 && rows > 0, "island grid must be non-empty");
        assert!(cell_size > 0.0, "cell size must be positive");

        let origin_x = -(cols as f32) * cell_size * 0.5;
        let origin_y = -(rows as f32) * cell_size * 0.5;

        let heights = heightmap::generate_height_field(cols, rows, seed, params);
        let is_water = heightmap::water_mask(&heights);
        let is_grass = heightmap::grass_mask(&heights);
        let patches = patches::stamp_patches(&heights, &is_grass, seed);
        let segments = boundary::extract_boundaries(&is_water, cell_size, origin_x, origin_y);

        Self {
            cols,
            rows,
            cell_size,
            seed,
            origin_x,
            origin_y,
            heights,
            is_water,
            is_grass,
            patches,
            segments,
        }
    }

    /// Generate and hand every boundary segment to the physics collaborator.
    /// The handoff happens exactly once; the island keeps no sink reference.
    pub fn generate_into(
        cols: usize,
        rows: usize,
        cell_size: f32,
        seed: u64,
        params: &HeightParams,
        sink: &mut dyn CollisionSink,
    ) -> Self {
        let island = Self::generate(cols, rows, cell_size, seed, params);
        for s in &island.segments {
            sink.add_static_edge(s.a, s.b);
        }
        island
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The extracted boundary segments (also delivered to the sink, if any).
    pub fn boundary_segments(&self) -> &[BoundarySegment] {
        &self.segments
    }

    // =========================================================================
    // PER-CELL SNAPSHOT ACCESS (renderer surface, read-only)
    // =========================================================================

    pub fn height_at(&self, x: usize, y: usize) -> f32 {
        *self.heights.get(x, y)
    }

    pub fn is_water_cell(&self, x: usize, y: usize) -> bool {
        *self.is_water.get(x, y)
    }

    pub fn is_grass_cell(&self, x: usize, y: usize) -> bool {
        *self.is_grass.get(x, y)
    }

    pub fn patch_at(&self, x: usize, y: usize) -> PatchKind {
        *self.patches.get(x, y)
    }

    pub fn terrain_at_cell(&self, x: usize, y: usize) -> TerrainType {
        heightmap::classify(*self.heights.get(x, y), *self.patches.get(x, y))
    }

    // =========================================================================
    // WORLD-SPACE QUERIES
    // =========================================================================

    /// Map world coordinates to a grid cell, or `None` outside the grid.
    pub fn world_to_cell(&self, wx: f32, wy: f32) -> Option<(usize, usize)> {
        let cx = ((wx - self.origin_x) / self.cell_size).floor();
        let cy = ((wy - self.origin_y) / self.cell_size).floor();
        if cx < 0.0 || cy < 0.0 || cx >= self.cols as f32 || cy >= self.rows as f32 {
            return None;
        }
        Some((cx as usize, cy as usize))
    }

    /// World-space center of a grid cell.
    pub fn cell_center(&self, x: usize, y: usize) -> WorldPoint {
        WorldPoint::new(
            self.origin_x + x as f32 * self.cell_size + self.cell_size * 0.5,
            self.origin_y + y as f32 * self.cell_size + self.cell_size * 0.5,
        )
    }

    /// True if this world position is water. Outside the island counts as
    /// water.
    pub fn is_water_world(&self, wx: f32, wy: f32) -> bool {
        match self.world_to_cell(wx, wy) {
            Some((x, y)) => *self.is_water.get(x, y),
            None => true,
        }
    }

    /// Classify the terrain at world coordinates. Outside the island is
    /// water; patches override grass inside the grass band.
    pub fn terrain_at_world(&self, wx: f32, wy: f32) -> TerrainType {
        match self.world_to_cell(wx, wy) {
            Some((x, y)) => self.terrain_at_cell(x, y),
            None => TerrainType::Water,
        }
    }

    /// Find the nearest walkable land cell to a world position.
    ///
    /// Expanding square-ring search from the mapped cell (grid center if the
    /// position is outside the island). Accepts the first non-water cell a
    /// touch above the beach threshold, so results are never right on the
    /// shoreline. Rings only visit their border, never the interior.
    pub fn find_nearest_land(&self, wx: f32, wy: f32, max_radius_cells: usize) -> NearestLand {
        let (cx, cy) = self
            .world_to_cell(wx, wy)
            .unwrap_or((self.cols / 2, self.rows / 2));

        for r in 0..=max_radius_cells {
            let x0 = cx.saturating_sub(r);
            let x1 = (cx + r).min(self.cols - 1);
            let y0 = cy.saturating_sub(r);
            let y1 = (cy + r).min(self.rows - 1);

            for y in y0..=y1 {
                for x in x0..=x1 {
                    // Border of the square ring only.
                    if y != y0 && y != y1 && x != x0 && x != x1 {
                        continue;
                    }
                    if !*self.is_water.get(x, y)
                        && *self.heights.get(x, y) >= BEACH_T + LAND_SAFETY_MARGIN
                    {
                        return NearestLand::Found(self.cell_center(x, y));
                    }
                }
            }
        }

        NearestLand::Fallback(WorldPoint::ORIGIN)
    }

    /// Walkable land near the island center: the standard spawn point.
    pub fn find_center_land_spawn(&self) -> NearestLand {
        self.find_nearest_land(0.0, 0.0, self.cols.max(self.rows))
    }

    /// World rectangle covered by the grid.
    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds {
            min_x: self.origin_x,
            min_y: self.origin_y,
            width: self.cols as f32 * self.cell_size,
            height: self.rows as f32 * self.cell_size,
        }
    }
}
