//! Field simulation health check

use glam::{Vec2, Vec3};

use crate::config::FieldConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::input::Direction;
use crate::sim::field::FieldSimulation;
use crate::sim::Simulation;

/// Smoke-runs the field simulation and verifies its core invariants:
/// deterministic instance evaluation, bounded bend, finite output
pub struct FieldCheck;

impl FieldCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FieldCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for FieldCheck {
    fn name(&self) -> &'static str {
        "Field Simulation"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates determinism and boundedness of the blade pipeline")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        let config = FieldConfig {
            blade_count: 512,
            field_size: 20.0,
            blade_height: 1.0,
            wind_speed: 1.0,
        };
        let mut sim = match FieldSimulation::new(config) {
            Ok(sim) => sim,
            Err(e) => return CheckResult::fail(format!("Construction failed: {}", e)),
        };
        details.push("  ✓ Simulation constructed".to_string());

        // Drive the body for two seconds so wind, trail, and rolling all engage
        sim.input_mut().press(Direction::Forward);
        for _ in 0..120 {
            sim.tick(1.0 / 60.0);
        }
        if sim.body().position.z >= 0.0 {
            return CheckResult::fail("Body did not respond to input")
                .with_details(details.join("\n"));
        }
        details.push(format!(
            "  ✓ Body at ({:.2}, {:.2}) after 2s of forward input",
            sim.body().position.x,
            sim.body().position.z
        ));

        let camera = Vec3::new(0.0, 10.0, 15.0);
        let first = sim.blades(camera);
        let second = sim.blades(camera);
        if first != second {
            return CheckResult::fail("Instance evaluation is not deterministic")
                .with_details(details.join("\n"));
        }
        details.push(format!("  ✓ {} instances evaluated deterministically", first.len()));

        let max_lean = sim.tuning().max_lean;
        for (index, blade) in first.iter().enumerate() {
            let lean = Vec2::new(blade.tip_offset.x, blade.tip_offset.z).length();
            if !blade.position.is_finite() || !blade.tip_offset.is_finite() {
                return CheckResult::fail(format!("Instance {} produced non-finite output", index))
                    .with_details(details.join("\n"));
            }
            if lean > max_lean * blade.height + 1e-4 {
                return CheckResult::fail(format!("Instance {} bend exceeds bound", index))
                    .with_details(details.join("\n"));
            }
        }
        details.push("  ✓ All bends within the lean bound".to_string());

        CheckResult::pass("Field simulation operational").with_details(details.join("\n"))
    }
}
