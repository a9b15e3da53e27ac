//! Island snapshot export
//!
//! Fixed-palette per-cell coloring and a PNG exporter. The live renderer is
//! an external collaborator; it reads the same `cell_color` snapshot the PNG
//! path uses, so the exported image is exactly what the game draws.

use std::error::Error;
use std::path::Path;

use image::{Rgb, RgbImage};

use crate::heightmap::{TerrainType, WATER_T};
use crate::island::Island;

// =============================================================================
// PALETTE
// =============================================================================

const DEEP_WATER: Rgb<u8> = Rgb([18, 31, 92]);
const SHALLOW_WATER: Rgb<u8> = Rgb([31, 115, 140]);
const BEACH: Rgb<u8> = Rgb([230, 204, 115]);
const GRASS: Rgb<u8> = Rgb([61, 158, 69]);
const DIRT: Rgb<u8> = Rgb([140, 102, 56]);
const GRAVEL: Rgb<u8> = Rgb([158, 158, 163]);
const ROCK: Rgb<u8> = Rgb([140, 140, 148]);

/// Water shallower than this fraction of the water threshold renders as deep.
const DEEP_WATER_FRAC: f32 = 0.7;

/// Color of one cell under the fixed island palette. Water splits into a
/// deep and a shallow tone by height; everything else follows the terrain
/// classification (patches included).
pub fn cell_color(island: &Island, x: usize, y: usize) -> Rgb<u8> {
    match island.terrain_at_cell(x, y) {
        TerrainType::Water => {
            if island.height_at(x, y) < DEEP_WATER_FRAC * WATER_T {
                DEEP_WATER
            } else {
                SHALLOW_WATER
            }
        }
        TerrainType::Beach => BEACH,
        TerrainType::Grass => GRASS,
        TerrainType::Dirt => DIRT,
        TerrainType::Gravel => GRAVEL,
        TerrainType::Rock => ROCK,
    }
}

/// Export the island as a cols x rows PNG, one pixel per cell. Rows are
/// flipped so world +y points up in the image.
pub fn export_png(island: &Island, path: &Path) -> Result<(), Box<dyn Error>> {
    let cols = island.cols() as u32;
    let rows = island.rows() as u32;
    let mut img: RgbImage = RgbImage::new(cols, rows);

    for y in 0..island.rows() {
        for x in 0..island.cols() {
            let py = rows - 1 - y as u32;
            img.put_pixel(x as u32, py, cell_color(island, x, y));
        }
    }

    img.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heightmap::HeightParams;

    #[test]
    fn test_corner_cells_render_deep_water() {
        let island = Island::generate(32, 32, 1.0, 42, &HeightParams::default());
        // The radial mask zeroes the corners; height 0.0 is deep water.
        assert_eq!(cell_color(&island, 0, 0), DEEP_WATER);
        assert_eq!(cell_color(&island, 31, 31), DEEP_WATER);
    }

    #[test]
    fn test_palette_follows_classification() {
        let island = Island::generate(64, 64, 1.0, 42, &HeightParams::default());
        for y in 0..64 {
            for x in 0..64 {
                let c = cell_color(&island, x, y);
                match island.terrain_at_cell(x, y) {
                    TerrainType::Water => assert!(c == DEEP_WATER || c == SHALLOW_WATER),
                    TerrainType::Beach => assert_eq!(c, BEACH),
                    TerrainType::Grass => assert_eq!(c, GRASS),
                    TerrainType::Dirt => assert_eq!(c, DIRT),
                    TerrainType::Gravel => assert_eq!(c, GRAVEL),
                    TerrainType::Rock => assert_eq!(c, ROCK),
                }
            }
        }
    }
}
