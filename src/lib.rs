//! Meadow
//!
//! An interactive grass field simulation: up to half a million procedurally
//! generated blades that bend away from a rolling, player-driven body and
//! sway in a time-varying wind. The crate ends at a per-frame data boundary
//! (per-instance transform + color, body transform); windowing, rendering,
//! and UI belong to the embedder.

/// Field configuration - profile loading and boundary validation
pub mod config;

/// Health check system for validating simulation subsystems
pub mod health;

/// Per-frame input snapshot - directional flags and pointer target
pub mod input;

/// Field simulation - blades, wind, trail, body, and the frame scheduler seam
pub mod sim;
