//! Hash primitives for deterministic per-instance attributes
//!
//! Every blade attribute is a pure function of the instance index through one
//! of these hashes; no stateful RNG is involved, so evaluation is reproducible
//! and order-independent across instances.

use glam::Vec2;

/// Integer hash producing a value in [0, 1).
///
/// Each call site must use its own seed constant; two attributes derived from
/// the same seed would be visibly correlated across the field.
pub fn hash1(index: u32, seed: u32) -> f32 {
    let mut h = index
        .wrapping_mul(374_761_393)
        .wrapping_add(seed.wrapping_mul(1_274_126_177));
    h = (h ^ (h >> 13)).wrapping_mul(1_103_515_245);
    h = (h ^ (h >> 16)).wrapping_mul(0x5BD1_E995);
    h ^= h >> 15;
    (h & 0x7FFF_FFFF) as f32 / 0x8000_0000u32 as f32
}

/// Paired hash producing a value in [0, 1)^2.
///
/// The two lanes use decorrelated seeds derived from the caller's seed.
pub fn hash2(index: u32, seed: u32) -> Vec2 {
    Vec2::new(
        hash1(index, seed),
        hash1(index, seed.wrapping_add(0x9E37_79B9)),
    )
}

/// 2D lattice hash in [0, 1], for value-noise corners.
pub fn hash_2d(ix: i32, iz: i32, seed: u32) -> f32 {
    let mut h = (ix as u32)
        .wrapping_mul(374_761_393)
        .wrapping_add((iz as u32).wrapping_mul(668_265_263))
        .wrapping_add(seed.wrapping_mul(1_274_126_177));
    h = (h ^ (h >> 13)).wrapping_mul(1_103_515_245);
    h = (h ^ (h >> 16)).wrapping_mul(0x5BD1_E995);
    h ^= h >> 15;
    (h & 0x7FFF_FFFF) as f32 / 0x7FFF_FFFF_u32 as f32
}

/// Hermite smoothstep of x clamped to [0, 1].
pub fn smoothstep(x: f32) -> f32 {
    let x = x.clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash1_in_range() {
        for i in 0..10_000u32 {
            let h = hash1(i, 0x6A09_E667);
            assert!((0.0..1.0).contains(&h), "hash1({}) = {} out of range", i, h);
        }
    }

    #[test]
    fn test_hash1_deterministic() {
        for i in [0u32, 1, 17, 500_000] {
            assert_eq!(hash1(i, 42).to_bits(), hash1(i, 42).to_bits());
        }
    }

    #[test]
    fn test_hash1_seeds_decorrelate() {
        let mut same = 0;
        for i in 0..1000u32 {
            if (hash1(i, 1) - hash1(i, 2)).abs() < 1e-3 {
                same += 1;
            }
        }
        // Two seeds agreeing on more than a sliver of indices means the seed
        // is not actually mixed into the hash
        assert!(same < 20, "seeds nearly identical on {} of 1000 indices", same);
    }

    #[test]
    fn test_hash2_lanes_differ() {
        let mut same = 0;
        for i in 0..1000u32 {
            let h = hash2(i, 7);
            if (h.x - h.y).abs() < 1e-3 {
                same += 1;
            }
        }
        assert!(same < 20, "hash2 lanes equal on {} of 1000 indices", same);
    }

    #[test]
    fn test_hash1_roughly_uniform() {
        let n = 20_000u32;
        let mut buckets = [0u32; 10];
        for i in 0..n {
            let h = hash1(i, 0xBB67_AE85);
            buckets[(h * 10.0) as usize] += 1;
        }
        for (b, count) in buckets.iter().enumerate() {
            let expected = n / 10;
            assert!(
                count.abs_diff(expected) < expected / 4,
                "bucket {} has {} samples, expected ~{}",
                b,
                count,
                expected
            );
        }
    }

    #[test]
    fn test_hash_2d_negative_coordinates() {
        let h = hash_2d(-5, -9, 3);
        assert!((0.0..=1.0).contains(&h));
        assert_eq!(h.to_bits(), hash_2d(-5, -9, 3).to_bits());
    }

    #[test]
    fn test_smoothstep_endpoints_and_clamping() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(-2.0), 0.0);
        assert_eq!(smoothstep(3.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_smoothstep_monotonic() {
        let mut prev = 0.0;
        for step in 0..=100 {
            let v = smoothstep(step as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
