//! Color and shading assignment
//!
//! Each blade belongs to one of three hue categories, each with its own
//! base-to-tip gradient. On top of that: per-instance brightness jitter, a
//! soft shadow under the rolling body, and a directional light against a
//! synthesized normal that fakes cylindrical shading on flat geometry.

use glam::{Vec2, Vec3};

use super::hash::smoothstep;

const LIGHT_DIR: Vec3 = Vec3::new(-0.35, 0.85, 0.4);
const AMBIENT: f32 = 0.35;

/// Hue category a blade is assigned to by hash threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    /// Neutral green, the bulk of the field
    Meadow = 0,
    /// Yellow-tinted, sun-dried
    Straw = 1,
    /// Dark, saturated green
    Moss = 2,
}

impl ColorCategory {
    /// Thresholds a hash value in [0, 1) into a category
    pub fn from_hash(h: f32) -> Self {
        if h < 0.6 {
            Self::Meadow
        } else if h < 0.85 {
            Self::Straw
        } else {
            Self::Moss
        }
    }

    /// Base-of-blade and tip-of-blade colors for this category
    fn gradient(self) -> (Vec3, Vec3) {
        match self {
            Self::Meadow => (Vec3::new(0.05, 0.20, 0.01), Vec3::new(0.45, 0.70, 0.25)),
            Self::Straw => (Vec3::new(0.08, 0.18, 0.01), Vec3::new(0.65, 0.72, 0.18)),
            Self::Moss => (Vec3::new(0.02, 0.12, 0.01), Vec3::new(0.20, 0.45, 0.10)),
        }
    }
}

/// Computes the lit base and tip colors for one blade.
///
/// `jitter` is the per-instance brightness hash, `normal_skew` tilts the
/// shading normal sideways to suggest a rounded cross-section, and the
/// shadow falloff uses the same smoothstep pattern as the trail bend but
/// with its own radius and strength.
#[allow(clippy::too_many_arguments)]
pub fn blade_color(
    category: ColorCategory,
    jitter: f32,
    normal_skew: f32,
    yaw: f32,
    position: Vec2,
    lead: Vec2,
    shadow_radius: f32,
    shadow_strength: f32,
) -> (Vec3, Vec3) {
    let (base, tip) = category.gradient();

    let brightness = 0.85 + jitter * 0.3;

    // Normal synthesized from the blade facing, tilted by the lateral skew
    let tangent = Vec2::from_angle(yaw);
    let facing = tangent.perp();
    let side = facing + tangent * normal_skew;
    let normal = Vec3::new(side.x, 0.75, side.y).normalize();
    let diffuse = normal.dot(LIGHT_DIR.normalize()).max(0.0);
    let light = AMBIENT + (1.0 - AMBIENT) * diffuse;

    let dist = position.distance(lead);
    let shadow = 1.0 - shadow_strength * smoothstep(1.0 - dist / shadow_radius.max(1e-6));

    let scale = brightness * light * shadow;
    (
        (base * scale).clamp(Vec3::ZERO, Vec3::ONE),
        (tip * scale).clamp(Vec3::ZERO, Vec3::ONE),
    )
}
