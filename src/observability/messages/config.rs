// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and check runs.

use crate::observability::messages::StructuredLog;
use crate::term::Operator;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A configuration file was loaded.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use connective::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     path: "checks.yaml",
///     format: "yaml",
///     check_count: 3,
/// };
///
/// assert_eq!(msg.to_string(), "Loaded yaml configuration from checks.yaml: 3 checks");
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub format: &'a str,
    pub check_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} configuration from {}: {} checks",
            self.format, self.path, self.check_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            format = self.format,
            check_count = self.check_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            format = self.format,
            check_count = self.check_count,
        )
    }
}

/// Configuration validation rejected a file.
///
/// # Log Level
/// `warn!` - The file will not be used
pub struct ConfigValidationFailed {
    pub error_count: usize,
}

impl Display for ConfigValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validation failed with {} errors",
            self.error_count
        )
    }
}

impl StructuredLog for ConfigValidationFailed {
    fn log(&self) {
        tracing::warn!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "config_validation_failed",
            span_name = name,
            error_count = self.error_count,
        )
    }
}

/// A configured check finished.
///
/// # Log Level
/// `info!` - One event per configured check
///
/// # Example
/// ```
/// use connective::observability::messages::config::CheckCompleted;
/// use connective::Operator;
/// use std::time::Duration;
///
/// let msg = CheckCompleted {
///     check_id: "disk_ready",
///     operator: Operator::And,
///     outcome: "false",
///     invoked: 2,
///     duration: Duration::from_millis(12),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct CheckCompleted<'a> {
    pub check_id: &'a str,
    pub operator: Operator,
    /// `true`, `false`, or the failure message
    pub outcome: &'a str,
    /// Number of callable terms that ran
    pub invoked: usize,
    pub duration: std::time::Duration,
}

impl Display for CheckCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Check '{}' ({}) settled with {} after invoking {} callables in {:?}",
            self.check_id, self.operator, self.outcome, self.invoked, self.duration
        )
    }
}

impl StructuredLog for CheckCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            check_id = self.check_id,
            operator = %self.operator,
            outcome = self.outcome,
            invoked = self.invoked,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "check_completed",
            span_name = name,
            check_id = self.check_id,
            operator = %self.operator,
            outcome = self.outcome,
        )
    }
}
