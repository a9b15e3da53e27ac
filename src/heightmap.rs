//! Island height field generation and terrain classification
//!
//! A radially-masked fractal height field: fBm value noise gives the terrain
//! variation, and a distance-from-center mask pulls the grid perimeter down
//! below the water threshold so every island is surrounded by open sea.

use serde::{Deserialize, Serialize};

use crate::noise::NoiseField;
use crate::patches::PatchKind;
use crate::tilemap::Tilemap;

// =============================================================================
// CLASSIFICATION THRESHOLDS
// =============================================================================

/// Below this height a cell is water.
pub const WATER_T: f32 = 0.48;
/// Below this height (and above water) a cell is beach.
pub const BEACH_T: f32 = 0.53;
/// Below this height (and above beach) a cell is grass; above is rock.
pub const GRASS_T: f32 = 0.80;

// =============================================================================
// GENERATION PARAMETERS
// =============================================================================

/// Parameters for island height generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeightParams {
    /// Base noise frequency (lower = larger landforms)
    pub freq: f32,
    /// Number of fBm octaves
    pub octaves: u32,
    /// Amplitude decay per octave (0.0-1.0)
    pub gain: f32,
    /// Frequency multiplier per octave
    pub lacunarity: f32,
    /// Exponent of the radial island mask (higher = wider landmass)
    pub mask_power: f32,
}

impl Default for HeightParams {
    fn default() -> Self {
        Self {
            freq: 0.0085,
            octaves: 4,
            gain: 0.5,
            lacunarity: 2.0,
            mask_power: 1.6,
        }
    }
}

/// Terrain classification derived from height and patch data. Never stored
/// per cell; always recomputed from the thresholds above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    Water,
    Beach,
    Grass,
    Dirt,
    Gravel,
    Rock,
}

impl TerrainType {
    pub fn display_name(&self) -> &'static str {
        match self {
            TerrainType::Water => "Water",
            TerrainType::Beach => "Beach",
            TerrainType::Grass => "Grass",
            TerrainType::Dirt => "Dirt",
            TerrainType::Gravel => "Gravel",
            TerrainType::Rock => "Rock",
        }
    }

    pub fn is_walkable(&self) -> bool {
        !matches!(self, TerrainType::Water)
    }
}

// =============================================================================
// HEIGHT FIELD GENERATION
// =============================================================================

/// Generate the normalized height field for a `cols`x`rows` island.
///
/// Per cell: normalize coordinates to [-1, 1] around the grid center, damp
/// by the radial mask `1 - r^mask_power`, and scale the [0, 1]-remapped fBm
/// sample by it. Result is clamped to [0, 1].
pub fn generate_height_field(
    cols: usize,
    rows: usize,
    seed: u64,
    params: &HeightParams,
) -> Tilemap<f32> {
    let noise = NoiseField::new(seed);
    let mut heights = Tilemap::new_with(cols, rows, 0.0f32);

    for y in 0..rows {
        let ny = (y as f32 / rows as f32 - 0.5) * 2.0;
        for x in 0..cols {
            let nx = (x as f32 / cols as f32 - 0.5) * 2.0;

            let r = (nx * nx + ny * ny).sqrt();
            let mask = (1.0 - r.powf(params.mask_power)).clamp(0.0, 1.0);

            let h = noise.fbm(
                x as f32 * params.freq,
                y as f32 * params.freq,
                params.octaves,
                params.gain,
                params.lacunarity,
            );
            let val = ((h * 0.5 + 0.5) * mask).clamp(0.0, 1.0);

            heights.set(x, y, val);
        }
    }

    heights
}

/// Derive the water mask from a height field.
pub fn water_mask(heights: &Tilemap<f32>) -> Tilemap<bool> {
    let mut mask = Tilemap::new_with(heights.width, heights.height, false);
    for (x, y, &h) in heights.iter() {
        mask.set(x, y, h < WATER_T);
    }
    mask
}

/// Derive the grass-band mask (cells eligible for patch decoration).
pub fn grass_mask(heights: &Tilemap<f32>) -> Tilemap<bool> {
    let mut mask = Tilemap::new_with(heights.width, heights.height, false);
    for (x, y, &h) in heights.iter() {
        mask.set(x, y, (BEACH_T..GRASS_T).contains(&h));
    }
    mask
}

/// Classify a cell from its height and patch overlay. Patches only override
/// the grass band; dirt or gravel on any other band would mean a stamping
/// bug upstream.
pub fn classify(height: f32, patch: PatchKind) -> TerrainType {
    if height < WATER_T {
        return TerrainType::Water;
    }
    if height < BEACH_T {
        return TerrainType::Beach;
    }
    if height < GRASS_T {
        return match patch {
            PatchKind::Dirt => TerrainType::Dirt,
            PatchKind::Gravel => TerrainType::Gravel,
            PatchKind::None => TerrainType::Grass,
        };
    }
    TerrainType::Rock
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_field_deterministic() {
        let params = HeightParams::default();
        let a = generate_height_field(8, 8, 42, &params);
        let b = generate_height_field(8, 8, 42, &params);
        for (x, y, &h) in a.iter() {
            assert_eq!(h, *b.get(x, y), "height differs at ({x},{y})");
        }
    }

    #[test]
    fn test_heights_in_unit_range() {
        let heights = generate_height_field(64, 64, 7, &HeightParams::default());
        for (_, _, &h) in heights.iter() {
            assert!((0.0..=1.0).contains(&h));
        }
    }

    #[test]
    fn test_mask_forces_corners_to_water() {
        // Grid corners sit at r ~= sqrt(2) > 1, so the mask zeroes them out.
        let heights = generate_height_field(64, 64, 42, &HeightParams::default());
        assert_eq!(*heights.get(0, 0), 0.0);
        assert_eq!(*heights.get(63, 0), 0.0);
        assert_eq!(*heights.get(0, 63), 0.0);
        assert!(*heights.get(0, 0) < WATER_T);
    }

    #[test]
    fn test_band_classification_monotonic() {
        assert_eq!(classify(0.0, PatchKind::None), TerrainType::Water);
        assert_eq!(classify(WATER_T - f32::EPSILON, PatchKind::None), TerrainType::Water);
        assert_eq!(classify(WATER_T, PatchKind::None), TerrainType::Beach);
        assert_eq!(classify(0.50, PatchKind::None), TerrainType::Beach);
        assert_eq!(classify(BEACH_T, PatchKind::None), TerrainType::Grass);
        assert_eq!(classify(0.70, PatchKind::None), TerrainType::Grass);
        assert_eq!(classify(GRASS_T, PatchKind::None), TerrainType::Rock);
        assert_eq!(classify(1.0, PatchKind::None), TerrainType::Rock);
    }

    #[test]
    fn test_patch_overrides_grass_only() {
        assert_eq!(classify(0.65, PatchKind::Dirt), TerrainType::Dirt);
        assert_eq!(classify(0.65, PatchKind::Gravel), TerrainType::Gravel);
        // A stray patch value outside the grass band must not leak through.
        assert_eq!(classify(0.30, PatchKind::Dirt), TerrainType::Water);
        assert_eq!(classify(0.90, PatchKind::Gravel), TerrainType::Rock);
    }

    #[test]
    fn test_masks_agree_with_classification() {
        let heights = generate_height_field(32, 32, 5, &HeightParams::default());
        let water = water_mask(&heights);
        let grass = grass_mask(&heights);
        for (x, y, &h) in heights.iter() {
            assert_eq!(*water.get(x, y), classify(h, PatchKind::None) == TerrainType::Water);
            assert_eq!(*grass.get(x, y), classify(h, PatchKind::None) == TerrainType::Grass);
        }
    }
}
