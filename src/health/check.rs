//! Core health check trait and result types

use std::time::Duration;

/// Outcome of a single system check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Pass,
    /// Check passed but something deserves attention
    Warn,
    /// Check failed
    Fail,
}

impl CheckStatus {
    /// Returns true unless the check failed
    pub fn is_ok(&self) -> bool {
        !self.is_fail()
    }

    /// Returns true if the check failed
    pub fn is_fail(&self) -> bool {
        matches!(self, CheckStatus::Fail)
    }

    /// Terminal label with ANSI color
    pub fn colored_label(&self) -> String {
        use colored::Colorize;
        match self {
            CheckStatus::Pass => "PASS".green().to_string(),
            CheckStatus::Warn => "WARN".yellow().to_string(),
            CheckStatus::Fail => "FAIL".red().to_string(),
        }
    }
}

/// Result of a system check, with optional details and timing
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub status: CheckStatus,
    /// Brief one-line summary
    pub message: String,
    /// Optional multi-line diagnostic detail
    pub details: Option<String>,
    /// How long the check took to run
    pub duration: Duration,
}

impl CheckResult {
    pub fn pass(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Pass, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Warn, message)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Fail, message)
    }

    fn with_status(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
            duration: Duration::ZERO,
        }
    }

    /// Attaches diagnostic details to the result
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Records how long the check took
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// A named health check over one subsystem
pub trait SystemCheck {
    /// Name of the system being checked
    fn name(&self) -> &'static str;

    /// Performs the check
    fn check(&self) -> CheckResult;

    /// Optional description of what this check validates
    fn description(&self) -> Option<&'static str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(CheckStatus::Pass.is_ok());
        assert!(CheckStatus::Warn.is_ok());
        assert!(!CheckStatus::Fail.is_ok());
        assert!(CheckStatus::Fail.is_fail());
    }

    #[test]
    fn test_result_builders() {
        let result = CheckResult::warn("low memory").with_details("1.2 GB free");
        assert_eq!(result.status, CheckStatus::Warn);
        assert_eq!(result.message, "low memory");
        assert_eq!(result.details.as_deref(), Some("1.2 GB free"));
        assert_eq!(result.duration, Duration::ZERO);
    }
}
