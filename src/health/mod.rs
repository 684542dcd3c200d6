//! Health check system for validating simulation subsystems
//!
//! Useful for CI smoke runs and for debugging a misconfigured embedding:
//! configuration loading, the field simulation's core invariants, and the
//! host system are each validated by a named check.
//!
//! # Example
//!
//! ```no_run
//! use meadow::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(FieldCheck::new())
//!     .add_check(SystemInfoCheck::new())
//!     .run();
//!
//! assert!(report.is_healthy());
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

/// Runs all default health checks and returns a report
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::FieldCheck::new())
        .add_check(checks::SystemInfoCheck::new())
        .run()
}
