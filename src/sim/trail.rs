//! Trail interaction model
//!
//! The rolling body leaves a two-point wake: the lead point is its current
//! position, the lag point trails behind it with exponential smoothing.
//! Blades near the lag-to-lead segment bend away from it, strongest at the
//! lead end, fading toward the tail.

use glam::{Vec2, Vec3, Vec3Swizzles};

use super::hash::smoothstep;

const EPS: f32 = 1e-6;

/// The two-point wake segment behind the body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionTrail {
    /// Current position of the body, updated every frame
    pub lead: Vec3,
    /// Smoothed trailing position; the only persistent deformation state
    pub lag: Vec3,
}

impl InteractionTrail {
    /// Creates a collapsed trail with both points at `start`
    pub fn new(start: Vec3) -> Self {
        Self {
            lead: start,
            lag: start,
        }
    }

    /// Moves the lead point and eases the lag point toward it.
    ///
    /// The lag step is `(1 - exp(-rate * dt))` of the remaining gap, so the
    /// lag point can never overshoot the lead or outrun it.
    pub fn advance(&mut self, lead: Vec3, dt: f32, rate: f32) {
        self.lead = lead;
        let alpha = 1.0 - (-rate * dt).exp();
        self.lag += (self.lead - self.lag) * alpha;
    }

    /// Distance between lag and lead points
    pub fn gap(&self) -> f32 {
        self.lead.distance(self.lag)
    }

    /// Computes the unit-scaled bend a blade at `pos` receives from the wake.
    ///
    /// Projects `pos` onto the lag-to-lead segment (clamped), then combines a
    /// radial smoothstep falloff within `radius` with an along-segment
    /// falloff that fades the tail end. Direction is strictly away from the
    /// closest point, horizontal only. The returned magnitude is in [0, 1];
    /// the caller applies the strength constant.
    pub fn bend_at(&self, pos: Vec2, radius: f32) -> Vec2 {
        let a = self.lag.xz();
        let b = self.lead.xz();
        let seg = b - a;
        let len_sq = seg.length_squared();

        // Degenerate segment: the epsilon drives t to 1, collapsing the
        // projection onto the lead point without a branch
        let t = (((pos - a).dot(seg) + EPS) / (len_sq + EPS)).clamp(0.0, 1.0);
        let closest = a + seg * t;

        let offset = pos - closest;
        let dist = offset.length();

        let radial = smoothstep(1.0 - dist / radius.max(EPS));
        let along = smoothstep(t);
        let direction = offset / dist.max(EPS);

        direction * (radial * along)
    }
}
