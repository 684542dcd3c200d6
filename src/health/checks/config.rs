//! Configuration system health check

use crate::config::{FieldConfig, MeadowConfig};
use crate::health::check::{CheckResult, SystemCheck};

/// Checks profile loading and boundary validation
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a config check with the default profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    /// Creates a config check with custom profiles
    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates profile loading and field parameter validation")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut all_success = true;
        let mut has_warnings = false;

        // Every profile must load and carry a valid field section
        for profile in &self.profiles {
            match MeadowConfig::load(profile) {
                Ok(config) => match config.field.validate() {
                    Ok(()) => details.push(format!(
                        "  ✓ Profile '{}': {} blades over {} units",
                        profile, config.field.blade_count, config.field.field_size
                    )),
                    Err(e) => {
                        details.push(format!("  ✗ Profile '{}': invalid field - {}", profile, e));
                        all_success = false;
                    }
                },
                Err(e) => {
                    details.push(format!("  ✗ Profile '{}': failed to load - {}", profile, e));
                    all_success = false;
                }
            }
        }

        match MeadowConfig::load_from_env() {
            Ok(config) => details.push(format!(
                "  ✓ Environment config: profile '{}' loaded",
                config.profile
            )),
            Err(e) => {
                details.push(format!("  ⚠ Environment config: {}", e));
                has_warnings = true;
            }
        }

        // The validation boundary must actually reject malformed input
        let malformed = FieldConfig {
            blade_count: 0,
            field_size: -5.0,
            ..FieldConfig::default()
        };
        if malformed.validate().is_ok() {
            details.push("  ✗ Malformed field config was accepted".to_string());
            all_success = false;
        } else {
            details.push("  ✓ Malformed field config rejected".to_string());
        }

        let details_str = details.join("\n");
        if !all_success {
            CheckResult::fail("Configuration validation failed").with_details(details_str)
        } else if has_warnings {
            CheckResult::warn("Config loaded with warnings").with_details(details_str)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details_str)
        }
    }
}
