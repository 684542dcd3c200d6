//! Deterministic instance generation
//!
//! A blade is never stored: every attribute is recomputed each frame as a
//! pure function of the instance index and the field configuration. Each
//! attribute draws from its own seed constant so independently varying
//! attributes show no patterning across the field.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::config::FieldConfig;

use super::hash::{hash1, hash2};
use super::shading::ColorCategory;

const POSITION_SEED: u32 = 0x9D2C_5680;
const SIZE_SEED: u32 = 0x3C6E_F372;
const REST_BEND_SEED: u32 = 0x1F83_D9AB;
const YAW_SEED: u32 = 0x5BE0_CD19;
const STIFFNESS_SEED: u32 = 0x6A09_E667;
const CATEGORY_SEED: u32 = 0xBB67_AE85;
const JITTER_SEED: u32 = 0x510E_527F;
const SKEW_SEED: u32 = 0xA54F_F53A;

/// Maximum rest-bend magnitude in world units
const REST_BEND_MAX: f32 = 0.25;

/// Derived attributes of a single blade instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BladeAttributes {
    /// World XZ position in [-field_size/2, field_size/2]^2
    pub position: Vec2,
    /// Blade height in world units
    pub height: f32,
    /// Width scale factor
    pub width: f32,
    /// Horizontal displacement of the tip at rest
    pub rest_bend: Vec2,
    /// Base rotation about the vertical axis, radians
    pub yaw: f32,
    /// Wind resistance in [0.5, 1.3); stiffer blades bend less
    pub stiffness: f32,
    /// Hue category for shading
    pub color_category: ColorCategory,
    /// Per-instance brightness jitter in [0, 1)
    pub color_jitter: f32,
    /// Lateral tilt of the synthesized shading normal, in [-0.5, 0.5)
    pub normal_skew: f32,
}

impl BladeAttributes {
    /// Evaluates the attributes of instance `index`.
    ///
    /// Position depends only on the index and the field size, so blades stay
    /// planted when height or wind settings change.
    pub fn generate(index: u32, config: &FieldConfig) -> Self {
        let cell = hash2(index, POSITION_SEED);
        let position = (cell - 0.5) * config.field_size;

        let size = hash2(index, SIZE_SEED);
        let height = config.blade_height + size.x * 0.8;
        let width = 0.7 + size.y * 0.5;

        let rest = hash2(index, REST_BEND_SEED);
        let rest_bend = Vec2::from_angle(rest.x * TAU) * (rest.y * REST_BEND_MAX);

        Self {
            position,
            height,
            width,
            rest_bend,
            yaw: hash1(index, YAW_SEED) * TAU,
            stiffness: 0.5 + hash1(index, STIFFNESS_SEED) * 0.8,
            color_category: ColorCategory::from_hash(hash1(index, CATEGORY_SEED)),
            color_jitter: hash1(index, JITTER_SEED),
            normal_skew: hash1(index, SKEW_SEED) - 0.5,
        }
    }
}
