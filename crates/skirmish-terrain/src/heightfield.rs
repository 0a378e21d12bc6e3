//! HeightField: seeded heightmap with interpolated elevation queries.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skirmish_core::constants::{
    TERRAIN_BASE_CELLS, TERRAIN_HEIGHT_SCALE, TERRAIN_LACUNARITY, TERRAIN_OCTAVES,
    TERRAIN_PERSISTENCE, TERRAIN_RESOLUTION, TERRAIN_SIZE, TERRAIN_VALLEY_FLATTEN,
    TERRAIN_VALLEY_THRESHOLD,
};

/// A square heightmap centered on the origin.
///
/// `height_at` is total: queries outside the grid clamp to the edge, so
/// every (x, z) the simulation can produce has a defined elevation.
#[derive(Debug, Clone)]
pub struct HeightField {
    /// Side length in world units.
    size: f32,
    /// Cells per side; the vertex grid is (resolution + 1)².
    resolution: usize,
    /// World units per cell.
    cell_size: f32,
    /// Vertex elevations, row-major by z then x.
    heights: Vec<f32>,
}

impl HeightField {
    /// Build a field from pre-computed vertex heights.
    /// `heights.len()` must equal `(resolution + 1)²`.
    pub fn new(size: f32, resolution: usize, heights: Vec<f32>) -> Self {
        debug_assert_eq!(heights.len(), (resolution + 1) * (resolution + 1));
        Self {
            size,
            resolution,
            cell_size: size / resolution as f32,
            heights,
        }
    }

    /// Generate the default-sized terrain from a seed.
    pub fn generate(seed: u64) -> Self {
        Self::generate_with(seed, TERRAIN_SIZE, TERRAIN_RESOLUTION)
    }

    /// Generate a field of the given size and resolution from a seed.
    ///
    /// Layers several octaves of lattice value noise: each octave draws a
    /// coarse random lattice from the seeded RNG, upsamples it bilinearly
    /// onto the vertex grid, and accumulates with decaying amplitude.
    /// Heights below the valley threshold are flattened into valley floors.
    pub fn generate_with(seed: u64, size: f32, resolution: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = resolution + 1;
        let mut heights = vec![0.0f32; n * n];

        let mut amplitude = 1.0f32;
        let mut cells = TERRAIN_BASE_CELLS;
        for _ in 0..TERRAIN_OCTAVES {
            let lattice: Vec<f32> = (0..(cells + 1) * (cells + 1))
                .map(|_| rng.gen_range(-1.0f32..1.0))
                .collect();

            for gz in 0..n {
                for gx in 0..n {
                    let u = gx as f32 / resolution as f32 * cells as f32;
                    let v = gz as f32 / resolution as f32 * cells as f32;
                    heights[gz * n + gx] += bilinear(&lattice, cells + 1, u, v) * amplitude;
                }
            }

            amplitude *= TERRAIN_PERSISTENCE;
            cells = (cells as f32 * TERRAIN_LACUNARITY) as usize;
        }

        for h in &mut heights {
            *h *= TERRAIN_HEIGHT_SCALE;
            if *h < TERRAIN_VALLEY_THRESHOLD {
                *h = TERRAIN_VALLEY_THRESHOLD
                    + (*h - TERRAIN_VALLEY_THRESHOLD) * TERRAIN_VALLEY_FLATTEN;
            }
        }

        Self::new(size, resolution, heights)
    }

    /// Interpolated ground elevation at world (x, z).
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let half = self.size / 2.0;
        let u = ((x + half) / self.cell_size).clamp(0.0, self.resolution as f32);
        let v = ((z + half) / self.cell_size).clamp(0.0, self.resolution as f32);
        bilinear(&self.heights, self.resolution + 1, u, v)
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Bilinear sample of a square row-major grid at fractional (u, v),
/// clamping the upper cell edge so boundary samples stay in range.
fn bilinear(grid: &[f32], side: usize, u: f32, v: f32) -> f32 {
    let c0 = (u.floor() as usize).min(side - 1);
    let r0 = (v.floor() as usize).min(side - 1);
    let c1 = (c0 + 1).min(side - 1);
    let r1 = (r0 + 1).min(side - 1);

    let fu = u - c0 as f32;
    let fv = v - r0 as f32;

    let h00 = grid[r0 * side + c0];
    let h01 = grid[r0 * side + c1];
    let h10 = grid[r1 * side + c0];
    let h11 = grid[r1 * side + c1];

    let top = h00 * (1.0 - fu) + h01 * fu;
    let bottom = h10 * (1.0 - fu) + h11 * fu;
    top * (1.0 - fv) + bottom * fv
}
