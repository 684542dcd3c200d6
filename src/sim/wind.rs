//! Wind field
//!
//! Band-limited value noise sampled per instance per frame: a fine, fast
//! detail octave plus a coarse, slow gust octave. Stateless function of
//! world position and elapsed time.

use glam::Vec2;

use super::hash::hash_2d;

const DETAIL_SEED: u32 = 0x27D4_EB2F;
const GUST_SEED: u32 = 0x1656_67B1;

/// Octave constants for the wind noise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindOctaves {
    /// Spatial frequency of the detail octave (cycles per world unit)
    pub detail_scale: f32,
    /// Drift velocity of the detail octave in noise space
    pub detail_drift: Vec2,
    /// Spatial frequency of the gust octave
    pub gust_scale: f32,
    /// Drift velocity of the gust octave
    pub gust_drift: Vec2,
    /// Amplitude of the gust octave relative to the detail octave
    pub gust_amplitude: f32,
}

impl Default for WindOctaves {
    fn default() -> Self {
        Self {
            detail_scale: 0.8,
            detail_drift: Vec2::new(1.9, 1.4),
            gust_scale: 0.12,
            gust_drift: Vec2::new(0.35, 0.27),
            gust_amplitude: 1.2,
        }
    }
}

/// Smooth 2D value noise in [0, 1]: bilinear interpolation of four hashed
/// lattice corners with smoothstep weights.
pub fn value_noise(p: Vec2, seed: u32) -> f32 {
    let ix = p.x.floor() as i32;
    let iz = p.y.floor() as i32;
    let fx = p.x - p.x.floor();
    let fz = p.y - p.y.floor();

    // Smoothstep the weights for C1 continuity across cell boundaries
    let fx = fx * fx * (3.0 - 2.0 * fx);
    let fz = fz * fz * (3.0 - 2.0 * fz);

    let h00 = hash_2d(ix, iz, seed);
    let h10 = hash_2d(ix + 1, iz, seed);
    let h01 = hash_2d(ix, iz + 1, seed);
    let h11 = hash_2d(ix + 1, iz + 1, seed);

    let a = h00 + (h10 - h00) * fx;
    let b = h01 + (h11 - h01) * fx;
    a + (b - a) * fz
}

/// Samples the wind strength at a world XZ position.
///
/// Returns a signed value scaled by `speed`; the caller divides by the
/// instance's stiffness and applies the directional bend.
pub fn sample(pos: Vec2, time: f32, speed: f32, octaves: &WindOctaves) -> f32 {
    let detail = value_noise(pos * octaves.detail_scale + octaves.detail_drift * time, DETAIL_SEED) - 0.5;
    let gust =
        (value_noise(pos * octaves.gust_scale + octaves.gust_drift * time, GUST_SEED) - 0.5)
            * octaves.gust_amplitude;
    (detail + gust) * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_noise_in_range() {
        for i in 0..2000 {
            let p = Vec2::new(i as f32 * 0.173 - 100.0, i as f32 * 0.091 - 50.0);
            let n = value_noise(p, 3);
            assert!((0.0..=1.0).contains(&n), "noise({:?}) = {}", p, n);
        }
    }

    #[test]
    fn test_value_noise_matches_lattice_at_corners() {
        let n = value_noise(Vec2::new(4.0, -7.0), 9);
        assert!((n - hash_2d(4, -7, 9)).abs() < 1e-5);
    }

    #[test]
    fn test_value_noise_is_smooth() {
        // Adjacent samples a tiny step apart must stay close
        let step = 0.01;
        for i in 0..500 {
            let p = Vec2::new(i as f32 * 0.37, i as f32 * 0.21);
            let a = value_noise(p, 5);
            let b = value_noise(p + Vec2::new(step, 0.0), 5);
            assert!(
                (a - b).abs() < 0.08,
                "noise jumped {} over step {}",
                (a - b).abs(),
                step
            );
        }
    }

    #[test]
    fn test_sample_deterministic() {
        let octaves = WindOctaves::default();
        let p = Vec2::new(3.2, -8.9);
        let a = sample(p, 12.5, 1.0, &octaves);
        let b = sample(p, 12.5, 1.0, &octaves);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_zero_speed_silences_wind() {
        let octaves = WindOctaves::default();
        for i in 0..100 {
            let p = Vec2::new(i as f32 * 0.7, i as f32 * -0.3);
            assert_eq!(sample(p, i as f32 * 0.1, 0.0, &octaves), 0.0);
        }
    }

    #[test]
    fn test_sample_scales_linearly_with_speed() {
        let octaves = WindOctaves::default();
        let p = Vec2::new(1.5, 2.5);
        let base = sample(p, 4.0, 1.0, &octaves);
        let double = sample(p, 4.0, 2.0, &octaves);
        assert!((double - base * 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_sample_bounded() {
        let octaves = WindOctaves::default();
        let bound = 0.5 * (1.0 + octaves.gust_amplitude) + 1e-5;
        for i in 0..2000 {
            let p = Vec2::new(i as f32 * 0.41 - 40.0, i as f32 * 0.27 - 30.0);
            let s = sample(p, i as f32 * 0.03, 1.0, &octaves);
            assert!(s.abs() <= bound, "sample {} exceeds bound {}", s, bound);
        }
    }

    #[test]
    fn test_wind_varies_over_time() {
        let octaves = WindOctaves::default();
        let p = Vec2::new(5.0, 5.0);
        let a = sample(p, 0.0, 1.0, &octaves);
        let b = sample(p, 3.0, 1.0, &octaves);
        assert!((a - b).abs() > 1e-4, "wind static over 3 seconds");
    }
}
