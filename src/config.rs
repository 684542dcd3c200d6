//! Field configuration
//!
//! Supports multiple profiles (debug, release) with different settings.
//! Values outside valid ranges are rejected here, at the boundary; the
//! per-instance pipeline assumes validated input.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation error for field parameters
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldConfigError {
    #[error("blade_count must be greater than zero")]
    ZeroBladeCount,
    #[error("field_size must be positive, got {0}")]
    InvalidFieldSize(f32),
    #[error("blade_height must be positive, got {0}")]
    InvalidBladeHeight(f32),
    #[error("wind_speed must be non-negative, got {0}")]
    InvalidWindSpeed(f32),
}

/// Parameters of the grass field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of blade instances
    pub blade_count: u32,
    /// World-space extent of the square field, centered on the origin
    pub field_size: f32,
    /// Base blade height before per-instance variation
    pub blade_height: f32,
    /// Wind strength multiplier (0 disables wind)
    pub wind_speed: f32,
}

impl FieldConfig {
    /// Validates all parameters, returning the first violation found
    pub fn validate(&self) -> Result<(), FieldConfigError> {
        if self.blade_count == 0 {
            return Err(FieldConfigError::ZeroBladeCount);
        }
        if !(self.field_size > 0.0) {
            return Err(FieldConfigError::InvalidFieldSize(self.field_size));
        }
        if !(self.blade_height > 0.0) {
            return Err(FieldConfigError::InvalidBladeHeight(self.blade_height));
        }
        if !(self.wind_speed >= 0.0) {
            return Err(FieldConfigError::InvalidWindSpeed(self.wind_speed));
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            blade_count: 150_000,
            field_size: 50.0,
            blade_height: 1.0,
            wind_speed: 1.0,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeadowConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Grass field parameters
    pub field: FieldConfig,
}

impl MeadowConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{profile}.toml (profile-specific overrides)
    /// 3. Environment variables with prefix MEADOW_ (e.g., MEADOW_FIELD__BLADE_COUNT=50000)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Add profile-specific configuration
            .add_source(File::with_name(&format!("config/{}", profile)).required(false))
            // Add environment variables with MEADOW_ prefix
            // Use __ as separator for nested fields (e.g., MEADOW_FIELD__FIELD_SIZE)
            .add_source(
                Environment::with_prefix("MEADOW")
                    .separator("__")
                    .try_parsing(true),
            )
            // Set the profile
            .set_override("profile", profile)?
            .build()?;

        config.try_deserialize()
    }

    /// Loads configuration using the MEADOW_PROFILE environment variable,
    /// defaulting to "debug" if not set
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("MEADOW_PROFILE").unwrap_or_else(|_| "debug".to_string());
        Self::load(&profile)
    }
}

impl Default for MeadowConfig {
    fn default() -> Self {
        Self {
            profile: "debug".to_string(),
            field: FieldConfig::default(),
        }
    }
}
