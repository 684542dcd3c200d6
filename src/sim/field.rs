//! Per-frame field orchestration
//!
//! Owns the cross-frame state (body, trail, clock) and runs the pure
//! per-instance pass that composes rest pose, wind, trail bend, billboard
//! correction, and shading into renderable blade data. The per-instance
//! pass is embarrassingly parallel; no instance reads another's result.

use glam::{Vec2, Vec3, Vec3Swizzles};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{FieldConfig, FieldConfigError};
use crate::input::InputState;

use super::billboard;
use super::blade::BladeAttributes;
use super::body::{BodyTuning, KineticBody};
use super::shading;
use super::trail::InteractionTrail;
use super::wind::{self, WindOctaves};
use super::Simulation;

/// Tuning constants of the deformation pipeline.
///
/// One canonical parameter set ships as the default; every field is public
/// so an embedder's settings surface can override any of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTuning {
    /// Influence radius of the trail segment, world units
    pub trail_radius: f32,
    /// Peak trail bend magnitude, world units
    pub trail_strength: f32,
    /// Radius of the shadow under the body
    pub shadow_radius: f32,
    /// Peak shadow darkening in [0, 1]
    pub shadow_strength: f32,
    /// Exponential catch-up rate of the lag point, per second
    pub lag_rate: f32,
    /// Peak wind bend magnitude before stiffness division
    pub wind_bend: f32,
    /// Horizontal direction the wind blows toward
    pub wind_direction: Vec2,
    /// Octave constants of the wind noise
    pub wind: WindOctaves,
    /// Tangent-view alignment above which billboard correction kicks in
    pub edge_on_threshold: f32,
    /// Maximum horizontal tip displacement as a fraction of blade height
    pub max_lean: f32,
    /// Kinetic body constants
    pub body: BodyTuning,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            trail_radius: 1.6,
            trail_strength: 0.9,
            shadow_radius: 1.0,
            shadow_strength: 0.55,
            lag_rate: 4.0,
            wind_bend: 0.35,
            wind_direction: Vec2::new(0.94, 0.33),
            wind: WindOctaves::default(),
            edge_on_threshold: 0.75,
            max_lean: 0.8,
            body: BodyTuning::default(),
        }
    }
}

/// Renderable data for one blade instance.
///
/// `tip_offset` is the displacement of the tip; the renderer applies it with
/// a quadratic profile along the normalized blade height so bend grows
/// superlinearly toward the tip. Its negative vertical component is the
/// foreshortening that keeps arc length roughly constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BladeOutput {
    /// Base position on the ground plane
    pub position: Vec3,
    /// Corrected rotation about the vertical axis, radians
    pub yaw: f32,
    /// Blade height in world units
    pub height: f32,
    /// Width scale factor
    pub width: f32,
    /// Tip displacement: horizontal bend plus vertical foreshortening
    pub tip_offset: Vec3,
    /// Color at the base of the blade
    pub base_color: Vec3,
    /// Color at the tip of the blade
    pub tip_color: Vec3,
}

/// The grass field simulation
pub struct FieldSimulation {
    config: FieldConfig,
    tuning: FieldTuning,
    input: InputState,
    body: KineticBody,
    trail: InteractionTrail,
    time: f32,
    /// Bumped whenever blade placement changes; an external renderer watches
    /// this to know when to rebuild its instance buffer
    generation: u64,
    active: bool,
}

impl FieldSimulation {
    /// Creates a field from a validated configuration
    pub fn new(config: FieldConfig) -> Result<Self, FieldConfigError> {
        config.validate()?;
        let tuning = FieldTuning::default();
        let start = Vec3::new(0.0, tuning.body.rest_height, 0.0);
        info!(
            blade_count = config.blade_count,
            field_size = config.field_size,
            "field simulation created"
        );
        Ok(Self {
            config,
            tuning,
            input: InputState::new(),
            body: KineticBody::new(start),
            trail: InteractionTrail::new(start),
            time: 0.0,
            generation: 0,
            active: true,
        })
    }

    /// Applies a new configuration.
    ///
    /// Changing `blade_count` or `field_size` invalidates blade placement and
    /// bumps the generation counter; `blade_height` and `wind_speed` apply
    /// live without regeneration.
    pub fn apply_config(&mut self, config: FieldConfig) -> Result<(), FieldConfigError> {
        config.validate()?;
        if config.blade_count != self.config.blade_count
            || config.field_size != self.config.field_size
        {
            self.generation += 1;
            info!(
                blade_count = config.blade_count,
                field_size = config.field_size,
                generation = self.generation,
                "field layout changed, instance buffer regeneration required"
            );
        } else {
            debug!("live parameter update");
        }
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn tuning(&self) -> &FieldTuning {
        &self.tuning
    }

    pub fn tuning_mut(&mut self) -> &mut FieldTuning {
        &mut self.tuning
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn body(&self) -> &KineticBody {
        &self.body
    }

    pub fn trail(&self) -> &InteractionTrail {
        &self.trail
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Evaluates every blade for the current frame.
    ///
    /// Pure with respect to the simulation state: calling it twice between
    /// ticks yields identical output. Instances are evaluated in parallel.
    pub fn blades(&self, camera_pos: Vec3) -> Vec<BladeOutput> {
        (0..self.config.blade_count)
            .into_par_iter()
            .map(|index| self.evaluate_blade(index, camera_pos))
            .collect()
    }

    /// Evaluates a single blade instance
    pub fn evaluate_blade(&self, index: u32, camera_pos: Vec3) -> BladeOutput {
        let attrs = BladeAttributes::generate(index, &self.config);
        let t = &self.tuning;

        let gust = wind::sample(attrs.position, self.time, self.config.wind_speed, &t.wind);
        let wind_bend = t.wind_direction.normalize_or_zero() * (gust * t.wind_bend / attrs.stiffness);
        let trail_bend = self.trail.bend_at(attrs.position, t.trail_radius) * t.trail_strength;

        let lateral = (attrs.rest_bend + wind_bend + trail_bend)
            .clamp_length_max(t.max_lean * attrs.height);
        // Circular-arc approximation: a blade leaning sideways shortens
        // vertically instead of stretching
        let droop = lateral.length_squared() / (2.0 * attrs.height.max(1e-4));

        let yaw = billboard::corrected_yaw(attrs.yaw, attrs.position, camera_pos, t.edge_on_threshold);
        let (base_color, tip_color) = shading::blade_color(
            attrs.color_category,
            attrs.color_jitter,
            attrs.normal_skew,
            yaw,
            attrs.position,
            self.trail.lead.xz(),
            t.shadow_radius,
            t.shadow_strength,
        );

        BladeOutput {
            position: Vec3::new(attrs.position.x, 0.0, attrs.position.y),
            yaw,
            height: attrs.height,
            width: attrs.width,
            tip_offset: Vec3::new(lateral.x, -droop, lateral.y),
            base_color,
            tip_color,
        }
    }
}

impl Simulation for FieldSimulation {
    fn tick(&mut self, delta_time: f32) {
        if !self.active {
            return;
        }

        self.time += delta_time;

        // Cross-frame state is fully written before any instance reads it:
        // body first, then the trail it feeds
        self.body.step(&self.input, delta_time, &self.tuning.body);
        self.trail
            .advance(self.body.position, delta_time, self.tuning.lag_rate);
    }

    fn reset(&mut self) {
        let start = Vec3::new(0.0, self.tuning.body.rest_height, 0.0);
        self.body = KineticBody::new(start);
        self.trail = InteractionTrail::new(start);
        self.time = 0.0;
        // Input reflects device state and is preserved across resets
    }

    fn name(&self) -> &str {
        "field"
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;

    const DT: f32 = 1.0 / 60.0;
    const CAMERA: Vec3 = Vec3::new(0.0, 12.0, 18.0);

    fn small_config() -> FieldConfig {
        FieldConfig {
            blade_count: 256,
            field_size: 20.0,
            blade_height: 1.0,
            wind_speed: 1.0,
        }
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = FieldConfig {
            blade_count: 0,
            ..small_config()
        };
        assert!(FieldSimulation::new(config).is_err());
    }

    #[test]
    fn test_blades_returns_one_output_per_instance() {
        let sim = FieldSimulation::new(small_config()).unwrap();
        assert_eq!(sim.blades(CAMERA).len(), 256);
    }

    #[test]
    fn test_blades_pure_between_ticks() {
        let mut sim = FieldSimulation::new(small_config()).unwrap();
        sim.input_mut().press(Direction::Forward);
        for _ in 0..30 {
            sim.tick(DT);
        }

        let a = sim.blades(CAMERA);
        let b = sim.blades(CAMERA);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_outputs_are_finite_and_bounded() {
        let mut sim = FieldSimulation::new(small_config()).unwrap();
        sim.input_mut().press(Direction::Forward);
        for _ in 0..120 {
            sim.tick(DT);
        }

        let max_lean = sim.tuning().max_lean;
        for blade in sim.blades(CAMERA) {
            assert!(blade.position.is_finite());
            assert!(blade.tip_offset.is_finite());
            assert!(blade.yaw.is_finite());
            let horizontal = Vec2::new(blade.tip_offset.x, blade.tip_offset.z);
            assert!(
                horizontal.length() <= max_lean * blade.height + 1e-4,
                "lean {} exceeds {} * height {}",
                horizontal.length(),
                max_lean,
                blade.height
            );
            // Foreshortening pulls down, never stretches up
            assert!(blade.tip_offset.y <= 0.0);
        }
    }

    #[test]
    fn test_foreshortening_tracks_squared_lean() {
        let mut sim = FieldSimulation::new(small_config()).unwrap();
        for _ in 0..60 {
            sim.tick(DT);
        }
        for blade in sim.blades(CAMERA) {
            let horizontal = Vec2::new(blade.tip_offset.x, blade.tip_offset.z);
            let expected = horizontal.length_squared() / (2.0 * blade.height);
            assert!((blade.tip_offset.y + expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_generation_bumps_on_layout_change_only() {
        let mut sim = FieldSimulation::new(small_config()).unwrap();
        assert_eq!(sim.generation(), 0);

        // Live parameters: no regeneration
        let mut config = small_config();
        config.wind_speed = 3.0;
        config.blade_height = 1.4;
        sim.apply_config(config).unwrap();
        assert_eq!(sim.generation(), 0);

        // Layout parameters: regeneration
        config.blade_count = 512;
        sim.apply_config(config).unwrap();
        assert_eq!(sim.generation(), 1);

        config.field_size = 40.0;
        sim.apply_config(config).unwrap();
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_apply_config_rejects_invalid() {
        let mut sim = FieldSimulation::new(small_config()).unwrap();
        let bad = FieldConfig {
            field_size: -1.0,
            ..small_config()
        };
        assert!(sim.apply_config(bad).is_err());
        // Original config retained
        assert_eq!(sim.config().field_size, 20.0);
    }

    #[test]
    fn test_tick_moves_body_and_trail() {
        let mut sim = FieldSimulation::new(small_config()).unwrap();
        sim.input_mut().press(Direction::Forward);
        for _ in 0..60 {
            sim.tick(DT);
        }
        assert!(sim.body().position.z < -0.1);
        assert_eq!(sim.trail().lead, sim.body().position);
        // Lag trails behind the lead while moving
        assert!(sim.trail().gap() > 0.0);
    }

    #[test]
    fn test_inactive_simulation_freezes() {
        let mut sim = FieldSimulation::new(small_config()).unwrap();
        sim.input_mut().press(Direction::Forward);
        sim.set_active(false);
        for _ in 0..30 {
            sim.tick(DT);
        }
        assert_eq!(sim.body().position.z, 0.0);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut sim = FieldSimulation::new(small_config()).unwrap();
        sim.input_mut().press(Direction::Right);
        for _ in 0..60 {
            sim.tick(DT);
        }
        sim.reset();

        assert_eq!(sim.body().position.x, 0.0);
        assert_eq!(sim.body().velocity, Vec3::ZERO);
        assert_eq!(sim.trail().gap(), 0.0);
        // Held input survives the reset
        assert!(sim.input_mut().is_held(Direction::Right));
    }

    #[test]
    fn test_zero_wind_leaves_distant_blades_at_rest_pose() {
        let mut config = small_config();
        config.wind_speed = 0.0;
        let mut sim = FieldSimulation::new(config).unwrap();
        sim.tick(DT);

        for index in 0..config.blade_count {
            let attrs = BladeAttributes::generate(index, &config);
            if attrs.position.length() < sim.tuning().trail_radius {
                continue;
            }
            let blade = sim.evaluate_blade(index, CAMERA);
            let horizontal = Vec2::new(blade.tip_offset.x, blade.tip_offset.z);
            assert!(
                (horizontal - attrs.rest_bend).length() < 1e-5,
                "blade {} bent without wind or trail",
                index
            );
        }
    }
}
