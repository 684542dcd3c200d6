//! Orientation correction for thin blades
//!
//! A blade is a nearly flat card; seen edge-on it collapses to a sub-pixel
//! sliver. When the blade's tangent lines up with the horizontal view
//! direction, its yaw is blended toward the camera-facing angle. The blend
//! is continuous in the alignment, so blades never pop as the camera moves.

use glam::{Vec2, Vec3, Vec3Swizzles};
use std::f32::consts::{FRAC_PI_2, PI};

use super::hash::smoothstep;

/// Returns the yaw to render the blade with, given the camera position.
///
/// Below `edge_threshold` alignment the base yaw passes through unchanged.
/// Blade geometry is symmetric under a half-turn, so the correction works
/// modulo pi and never rotates more than a quarter turn.
pub fn corrected_yaw(yaw: f32, blade_pos: Vec2, camera_pos: Vec3, edge_threshold: f32) -> f32 {
    let view = (blade_pos - camera_pos.xz()).normalize_or_zero();
    if view == Vec2::ZERO {
        // Camera directly overhead; any yaw reads fine
        return yaw;
    }

    let tangent = Vec2::from_angle(yaw);
    let alignment = tangent.dot(view).abs();
    let span = (1.0 - edge_threshold).max(1e-6);
    let blend = smoothstep((alignment - edge_threshold) / span);
    if blend == 0.0 {
        return yaw;
    }

    // Target tangent perpendicular to the view direction, taken modulo pi
    let target = view.perp();
    let mut delta = (target.y.atan2(target.x) - yaw).rem_euclid(PI);
    if delta > FRAC_PI_2 {
        delta -= PI;
    }

    yaw + delta * blend
}
