//! Host system information health check

use sysinfo::System;

use crate::health::check::{CheckResult, SystemCheck};

/// Gathers OS, CPU, and memory information; a half-million-blade field wants
/// a machine with a few cores and some headroom
pub struct SystemInfoCheck;

impl SystemInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for SystemInfoCheck {
    fn name(&self) -> &'static str {
        "System Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates OS, CPU, and memory information gathering")
    }

    fn check(&self) -> CheckResult {
        let mut sys = System::new_all();
        sys.refresh_all();

        let mut details = vec![
            format!(
                "  OS: {} {}",
                System::name().unwrap_or_else(|| "Unknown".to_string()),
                System::os_version().unwrap_or_else(|| "Unknown".to_string())
            ),
            format!(
                "  Kernel: {}",
                System::kernel_version().unwrap_or_else(|| "Unknown".to_string())
            ),
        ];

        let logical_cores = sys.cpus().len();
        if logical_cores == 0 {
            return CheckResult::warn("Unable to detect CPU cores")
                .with_details(details.join("\n"));
        }
        details.push(format!(
            "  CPU cores: {} physical, {} logical",
            System::physical_core_count().unwrap_or(0),
            logical_cores
        ));

        let total_memory_gb = sys.total_memory() as f64 / 1_073_741_824.0;
        details.push(format!("  Memory: {:.1} GB total", total_memory_gb));

        if let Some(hostname) = System::host_name() {
            details.push(format!("  Hostname: {}", hostname));
        }

        if total_memory_gb < 1.0 {
            CheckResult::warn("Low memory detected").with_details(details.join("\n"))
        } else {
            CheckResult::pass("System info gathered successfully").with_details(details.join("\n"))
        }
    }
}
