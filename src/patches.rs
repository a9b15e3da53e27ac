//! Decorative dirt and gravel patches
//!
//! Small circular patches stamped strictly inside the grass band, kept clear
//! of the beach and rock transitions by an inner height margin so decoration
//! never touches a band edge. Placement is seeded and fully reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::heightmap::{BEACH_T, GRASS_T};
use crate::tilemap::Tilemap;

/// Patch overlay for one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatchKind {
    #[default]
    None,
    Dirt,
    Gravel,
}

// Inner grass band: patches must stay this far (in height) from both edges.
const INNER_GRASS_LOW: f32 = BEACH_T + 0.02;
const INNER_GRASS_HIGH: f32 = GRASS_T - 0.03;

/// Target: at least this many patches regardless of grid size.
const MIN_PATCHES: usize = 120;
/// One extra patch per this many cells of grid area.
const AREA_PER_PATCH: usize = 2200;
/// Attempts to find a valid patch center before giving up.
const MAX_CENTER_TRIES: u32 = 4000;

/// Stamp circular dirt/gravel patches onto the grass band.
///
/// Patch count scales with grid area (~120-240 on a 512x512 grid). Centers
/// are rejection-sampled from the inner grass height range; once a center
/// search exhausts its tries the band is full (or absent) and stamping stops
/// early with fewer patches, which is an accepted outcome. Patches may
/// overlap and later ones overwrite earlier ones.
pub fn stamp_patches(
    heights: &Tilemap<f32>,
    grass: &Tilemap<bool>,
    seed: u64,
) -> Tilemap<PatchKind> {
    let cols = heights.width;
    let rows = heights.height;
    let mut patches = Tilemap::new_with(cols, rows, PatchKind::None);

    let num_patches = MIN_PATCHES.max(cols * rows / AREA_PER_PATCH);

    // Tiny radii in cells: ~2..5 on a 512-wide grid.
    let min_r = 2usize.max((cols as f32 * 0.003).round() as usize);
    let max_r = (min_r + 1).max((cols as f32 * 0.010).round() as usize);

    // Own RNG stream, derived from the island seed. The multiplier keeps the
    // patch stream decorrelated from any other consumer of the raw seed.
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_mul(9973));

    'patches: for _ in 0..num_patches {
        // Pick a center well inside the grass band.
        let mut center = None;
        for _ in 0..MAX_CENTER_TRIES {
            let cx = rng.gen_range(0..cols);
            let cy = rng.gen_range(0..rows);
            let v = *heights.get(cx, cy);
            if (INNER_GRASS_LOW..INNER_GRASS_HIGH).contains(&v) {
                center = Some((cx, cy));
                break;
            }
        }
        let Some((cx, cy)) = center else {
            // No eligible cell after the retry budget: the inner band is full
            // or absent, so further searches would fail the same way.
            break 'patches;
        };

        let r = rng.gen_range(min_r..=max_r);
        // Bias toward dirt.
        let kind = if rng.gen::<f32>() < 0.6 {
            PatchKind::Dirt
        } else {
            PatchKind::Gravel
        };

        let x0 = cx.saturating_sub(r);
        let x1 = (cx + r).min(cols - 1);
        let y0 = cy.saturating_sub(r);
        let y1 = (cy + r).min(rows - 1);
        let r2 = (r * r) as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as i64 - cx as i64;
                let dy = y as i64 - cy as i64;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                // Only stamp inner grass, so a circle that geometrically
                // crosses a band edge still never bleeds onto it.
                let v = *heights.get(x, y);
                if *grass.get(x, y) && (INNER_GRASS_LOW..INNER_GRASS_HIGH).contains(&v) {
                    patches.set(x, y, kind);
                }
            }
        }
    }

    patches
}
