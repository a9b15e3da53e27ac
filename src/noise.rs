//! Seeded value noise and fractal Brownian motion
//!
//! All randomness here comes from a single integer hash, so the height field
//! is a pure function of (x, y, seed) and rebuilds bit-for-bit from a saved
//! seed. No gradient tables, no floats in the hash path.

/// Deterministic noise source for one island seed.
#[derive(Clone, Copy, Debug)]
pub struct NoiseField {
    /// 64-bit seed folded to 32 bits so every seed bit reaches the mixer.
    seed_mix: u32,
}

impl NoiseField {
    pub fn new(seed: u64) -> Self {
        Self {
            seed_mix: (seed ^ (seed >> 32)) as u32,
        }
    }

    /// Hash a lattice point to [0, 1]. Integer multiply/xor/shift mixing;
    /// adjacent coordinates decorrelate after the two avalanche rounds.
    pub fn hash01(&self, x: i32, y: i32) -> f32 {
        let n = (x as u32)
            .wrapping_mul(374_761_393)
            ^ (y as u32).wrapping_mul(668_265_263)
            ^ self.seed_mix;
        let n = (n ^ (n >> 13)).wrapping_mul(1_274_126_177);
        let n = n ^ (n >> 16);
        (n & 0x7fff_ffff) as f32 / 0x7fff_ffff as f32
    }

    /// Value noise in [0, 1]: bilinear blend of the four surrounding lattice
    /// hashes, with a smoothstep weight per axis to kill grid-line artifacts.
    pub fn value_noise(&self, x: f32, y: f32) -> f32 {
        let xi = x.floor() as i32;
        let yi = y.floor() as i32;
        let xf = x - xi as f32;
        let yf = y - yi as f32;

        let v00 = self.hash01(xi, yi);
        let v10 = self.hash01(xi + 1, yi);
        let v01 = self.hash01(xi, yi + 1);
        let v11 = self.hash01(xi + 1, yi + 1);

        let u = xf * xf * (3.0 - 2.0 * xf);
        let v = yf * yf * (3.0 - 2.0 * yf);

        let i1 = lerp(v00, v10, u);
        let i2 = lerp(v01, v11, u);
        lerp(i1, i2, v)
    }

    /// Fractal Brownian motion in [-1, 1]: octaves of value noise at rising
    /// frequency and falling amplitude, normalized by the amplitude sum.
    pub fn fbm(&self, x: f32, y: f32, octaves: u32, gain: f32, lacunarity: f32) -> f32 {
        let mut amp = 1.0f32;
        let mut sum = 0.0f32;
        let mut norm = 0.0f32;
        let mut fx = x;
        let mut fy = y;

        for _ in 0..octaves {
            sum += amp * self.value_noise(fx, fy);
            norm += amp;
            amp *= gain;
            fx *= lacunarity;
            fy *= lacunarity;
        }

        if norm > 0.0 {
            sum / norm * 2.0 - 1.0
        } else {
            0.0
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic_and_in_range() {
        let noise = NoiseField::new(42);
        for y in -20..20 {
            for x in -20..20 {
                let v = noise.hash01(x, y);
                assert!((0.0..=1.0).contains(&v), "hash01({x},{y}) = {v}");
                assert_eq!(v, noise.hash01(x, y));
            }
        }
    }

    #[test]
    fn test_hash_varies_with_seed() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let differing = (0..64).filter(|&i| a.hash01(i, -i) != b.hash01(i, -i)).count();
        assert!(differing > 48, "only {differing}/64 samples changed with the seed");
    }

    #[test]
    fn test_high_seed_bits_matter() {
        // Seeds that agree in the low 32 bits must still produce different noise.
        let a = NoiseField::new(7);
        let b = NoiseField::new(7 | (1 << 40));
        let differing = (0..64).filter(|&i| a.hash01(i, i * 3) != b.hash01(i, i * 3)).count();
        assert!(differing > 48);
    }

    #[test]
    fn test_value_noise_hits_lattice_values() {
        let noise = NoiseField::new(99);
        // At integer coordinates the blend weights are zero.
        assert_eq!(noise.value_noise(5.0, -3.0), noise.hash01(5, -3));
        assert_eq!(noise.value_noise(0.0, 0.0), noise.hash01(0, 0));
    }

    #[test]
    fn test_value_noise_in_range_and_continuous() {
        let noise = NoiseField::new(1234);
        let mut prev = noise.value_noise(0.0, 0.5);
        for i in 1..400 {
            let v = noise.value_noise(i as f32 * 0.01, 0.5);
            assert!((0.0..=1.0).contains(&v));
            // Steps of 0.01 across unit cells should never jump far.
            assert!((v - prev).abs() < 0.1, "discontinuity at {i}");
            prev = v;
        }
    }

    #[test]
    fn test_fbm_range_and_determinism() {
        let noise = NoiseField::new(42);
        for y in 0..32 {
            for x in 0..32 {
                let v = noise.fbm(x as f32 * 0.1, y as f32 * 0.1, 4, 0.5, 2.0);
                assert!((-1.0..=1.0).contains(&v), "fbm out of range: {v}");
                assert_eq!(v, noise.fbm(x as f32 * 0.1, y as f32 * 0.1, 4, 0.5, 2.0));
            }
        }
    }

    #[test]
    fn test_fbm_zero_octaves_is_zero() {
        let noise = NoiseField::new(42);
        assert_eq!(noise.fbm(1.5, 2.5, 0, 0.5, 2.0), 0.0);
    }
}
