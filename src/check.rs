//! Threshold evaluation for monitoring checks
//!
//! After filtering, the remaining count is compared against the
//! warning/critical bounds to produce a monitoring status. Status maps
//! directly to the conventional check exit codes (0/1/2).

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Which inventory collection a run evaluates, chosen once from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    /// Evaluate triggered alerts
    Alerts,
    /// Evaluate compute nodes
    Nodes,
}

/// Monitoring check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Ok,
    Warning,
    Critical,
}

impl CheckStatus {
    /// Conventional monitoring exit code.
    pub fn exit_code(self) -> i32 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Critical => 2,
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// Compare the post-filter remaining count against the thresholds.
///
/// Critical takes precedence over warning. A threshold of `None` never
/// fires, so a run without thresholds always reports OK.
pub fn evaluate_thresholds(
    remaining: usize,
    warning: Option<usize>,
    critical: Option<usize>,
) -> CheckStatus {
    if let Some(limit) = critical {
        if remaining >= limit {
            return CheckStatus::Critical;
        }
    }
    if let Some(limit) = warning {
        if remaining >= limit {
            return CheckStatus::Warning;
        }
    }
    CheckStatus::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_thresholds_is_ok() {
        assert_eq!(evaluate_thresholds(100, None, None), CheckStatus::Ok);
    }

    #[test]
    fn test_warning_threshold() {
        assert_eq!(evaluate_thresholds(2, Some(3), None), CheckStatus::Ok);
        assert_eq!(evaluate_thresholds(3, Some(3), None), CheckStatus::Warning);
    }

    #[test]
    fn test_critical_takes_precedence() {
        assert_eq!(
            evaluate_thresholds(5, Some(1), Some(5)),
            CheckStatus::Critical
        );
        assert_eq!(
            evaluate_thresholds(4, Some(1), Some(5)),
            CheckStatus::Warning
        );
    }

    #[test]
    fn test_zero_remaining() {
        assert_eq!(evaluate_thresholds(0, Some(1), Some(2)), CheckStatus::Ok);
        // A critical threshold of zero always fires.
        assert_eq!(evaluate_thresholds(0, None, Some(0)), CheckStatus::Critical);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CheckStatus::Ok.exit_code(), 0);
        assert_eq!(CheckStatus::Warning.exit_code(), 1);
        assert_eq!(CheckStatus::Critical.exit_code(), 2);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CheckStatus::Critical.to_string(), "CRITICAL");
    }
}
