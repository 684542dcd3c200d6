//! Kinetic controller
//!
//! A force-driven body rolling on the ground plane. Discrete directional
//! inputs and an optional pointer target each contribute a fixed-magnitude
//! horizontal force; velocity gets multiplicative per-frame damping so the
//! body coasts instead of stopping dead. Its position feeds the interaction
//! trail as the lead point.

use glam::{Quat, Vec3};

use crate::input::{Direction, InputState};

/// Tuning constants for the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTuning {
    /// Magnitude of each input force contribution
    pub force: f32,
    /// Multiplicative velocity damping applied once per frame
    pub damping: f32,
    /// Fixed height the body rests at
    pub rest_height: f32,
    /// Rolling radius used to convert speed into spin
    pub radius: f32,
    /// Below this speed no rolling rotation is applied
    pub min_roll_speed: f32,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            force: 8.0,
            damping: 0.98,
            rest_height: 0.5,
            radius: 0.5,
            min_roll_speed: 0.05,
        }
    }
}

/// The interactive rolling body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KineticBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub orientation: Quat,
}

impl KineticBody {
    /// Creates a body at rest at `start`
    pub fn new(start: Vec3) -> Self {
        Self {
            position: start,
            velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }

    /// Integrates one frame of input-driven motion.
    ///
    /// Opposing directional inputs cancel through force summation. The
    /// vertical position is pinned to the rest height every frame; the body
    /// never leaves the ground plane.
    pub fn step(&mut self, input: &InputState, dt: f32, tuning: &BodyTuning) {
        let mut force = Vec3::ZERO;
        if input.is_held(Direction::Forward) {
            force.z -= tuning.force;
        }
        if input.is_held(Direction::Back) {
            force.z += tuning.force;
        }
        if input.is_held(Direction::Left) {
            force.x -= tuning.force;
        }
        if input.is_held(Direction::Right) {
            force.x += tuning.force;
        }

        if let Some(target) = input.pointer_target() {
            let toward = Vec3::new(
                target.x - self.position.x,
                0.0,
                target.z - self.position.z,
            )
            .normalize_or_zero();
            force += toward * tuning.force;
        }

        self.velocity += force * dt;
        self.velocity *= tuning.damping;
        self.position += self.velocity * dt;
        self.position.y = tuning.rest_height;

        // Roll about the horizontal axis perpendicular to travel. The speed
        // gate keeps the axis well-defined at rest.
        let speed = self.velocity.length();
        if speed > tuning.min_roll_speed {
            let axis = Vec3::Y.cross(self.velocity / speed);
            let angle = speed * dt / tuning.radius;
            self.orientation = (Quat::from_axis_angle(axis, angle) * self.orientation).normalize();
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
