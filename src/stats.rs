//! Island summary statistics
//!
//! Aggregate counts for CLI reporting and JSON export: band populations,
//! patch coverage, boundary size, and the chosen spawn point.

use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::heightmap::TerrainType;
use crate::island::Island;

/// Summary of one generated island.
#[derive(Clone, Debug, Serialize)]
pub struct IslandStats {
    pub seed: u64,
    pub cols: usize,
    pub rows: usize,
    pub cell_size: f32,
    pub water_cells: usize,
    pub beach_cells: usize,
    pub grass_cells: usize,
    pub dirt_cells: usize,
    pub gravel_cells: usize,
    pub rock_cells: usize,
    pub boundary_segments: usize,
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// True when no walkable land was found and the spawn is the fixed
    /// world-origin fallback.
    pub spawn_is_fallback: bool,
}

impl IslandStats {
    pub fn collect(island: &Island) -> Self {
        let mut water_cells = 0;
        let mut beach_cells = 0;
        let mut grass_cells = 0;
        let mut dirt_cells = 0;
        let mut gravel_cells = 0;
        let mut rock_cells = 0;

        for y in 0..island.rows() {
            for x in 0..island.cols() {
                match island.terrain_at_cell(x, y) {
                    TerrainType::Water => water_cells += 1,
                    TerrainType::Beach => beach_cells += 1,
                    TerrainType::Grass => grass_cells += 1,
                    TerrainType::Dirt => dirt_cells += 1,
                    TerrainType::Gravel => gravel_cells += 1,
                    TerrainType::Rock => rock_cells += 1,
                }
            }
        }

        let spawn = island.find_center_land_spawn();
        let point = spawn.point();

        Self {
            seed: island.seed(),
            cols: island.cols(),
            rows: island.rows(),
            cell_size: island.cell_size(),
            water_cells,
            beach_cells,
            grass_cells,
            dirt_cells,
            gravel_cells,
            rock_cells,
            boundary_segments: island.boundary_segments().len(),
            spawn_x: point.x,
            spawn_y: point.y,
            spawn_is_fallback: spawn.is_fallback(),
        }
    }

    pub fn land_cells(&self) -> usize {
        self.beach_cells + self.grass_cells + self.dirt_cells + self.gravel_cells + self.rock_cells
    }

    pub fn land_fraction(&self) -> f64 {
        self.land_cells() as f64 / (self.cols * self.rows) as f64
    }

    /// Write the stats as pretty-printed JSON.
    pub fn export_json(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heightmap::HeightParams;
    use crate::patches::PatchKind;

    #[test]
    fn test_band_counts_cover_grid() {
        let island = Island::generate(64, 64, 1.0, 42, &HeightParams::default());
        let stats = IslandStats::collect(&island);
        assert_eq!(stats.water_cells + stats.land_cells(), 64 * 64);
    }

    #[test]
    fn test_patch_counts_match_mask() {
        let island = Island::generate(128, 128, 1.0, 7, &HeightParams::default());
        let stats = IslandStats::collect(&island);
        let dirt = (0..128)
            .flat_map(|y| (0..128).map(move |x| (x, y)))
            .filter(|&(x, y)| island.patch_at(x, y) == PatchKind::Dirt)
            .count();
        assert_eq!(stats.dirt_cells, dirt);
    }

    #[test]
    fn test_all_water_island_reports_fallback_spawn() {
        // A near-zero mask power sends r^p to ~1 for every r > 0, so the
        // mask (and with it every height) collapses to ~0. The odd grid size
        // keeps any cell from landing exactly on r = 0.
        let params = HeightParams {
            mask_power: 1e-6,
            ..Default::default()
        };
        let island = Island::generate(9, 9, 1.0, 42, &params);
        let stats = IslandStats::collect(&island);
        assert_eq!(stats.water_cells, 81);
        assert_eq!(stats.land_cells(), 0);
        assert!(stats.spawn_is_fallback);
        assert_eq!((stats.spawn_x, stats.spawn_y), (0.0, 0.0));
        assert_eq!(stats.dirt_cells + stats.gravel_cells, 0);
    }
}
