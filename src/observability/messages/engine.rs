// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for connective evaluation events.
//!
//! This module contains message types for logging events related to:
//! * Operator evaluation lifecycle (start, completion, failure)
//! * Short-circuiting in the serial evaluator
//! * Term normalization and the callable depth limit
//!
//! The engine does not know whether a failed evaluation is an error for the
//! caller, so failures are logged at `debug!` like the rest of the lifecycle.

use crate::observability::messages::StructuredLog;
use crate::term::Operator;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Evaluation of an operator started.
///
/// # Log Level
/// `debug!` - Per-call lifecycle event
///
/// # Example
/// ```
/// use connective::observability::messages::engine::EvaluationStarted;
/// use connective::Operator;
///
/// let msg = EvaluationStarted {
///     operator: Operator::Every,
///     strategy: "parallel",
///     term_count: 4,
/// };
///
/// assert_eq!(msg.to_string(), "Evaluating 'every' with parallel strategy over 4 terms");
/// ```
pub struct EvaluationStarted<'a> {
    pub operator: Operator,
    pub strategy: &'a str,
    pub term_count: usize,
}

impl Display for EvaluationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Evaluating '{}' with {} strategy over {} terms",
            self.operator, self.strategy, self.term_count
        )
    }
}

impl StructuredLog for EvaluationStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            operator = %self.operator,
            strategy = self.strategy,
            term_count = self.term_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "evaluation",
            span_name = name,
            operator = %self.operator,
            strategy = self.strategy,
            term_count = self.term_count,
        )
    }
}

/// A serial evaluation stopped before its last term.
///
/// # Log Level
/// `debug!` - Per-call lifecycle event
pub struct ShortCircuited {
    pub operator: Operator,
    /// Index of the term that decided the result
    pub index: usize,
    pub value: bool,
    /// Number of terms left unevaluated
    pub skipped: usize,
}

impl Display for ShortCircuited {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}' short-circuited at term {} with {}, skipping {} terms",
            self.operator, self.index, self.value, self.skipped
        )
    }
}

impl StructuredLog for ShortCircuited {
    fn log(&self) {
        tracing::debug!(
            operator = %self.operator,
            index = self.index,
            value = self.value,
            skipped = self.skipped,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "short_circuit",
            span_name = name,
            operator = %self.operator,
            index = self.index,
            value = self.value,
            skipped = self.skipped,
        )
    }
}

/// Evaluation of an operator settled with a value.
///
/// # Log Level
/// `debug!` - Per-call lifecycle event
///
/// # Example
/// ```
/// use connective::observability::messages::engine::EvaluationCompleted;
/// use connective::Operator;
/// use std::time::Duration;
///
/// let msg = EvaluationCompleted {
///     operator: Operator::Or,
///     strategy: "serial",
///     evaluated: 2,
///     result: true,
///     duration: Duration::from_millis(5),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct EvaluationCompleted<'a> {
    pub operator: Operator,
    pub strategy: &'a str,
    /// Number of terms actually normalized
    pub evaluated: usize,
    pub result: bool,
    pub duration: std::time::Duration,
}

impl Display for EvaluationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "'{}' resolved {} after evaluating {} terms with {} strategy in {:?}",
            self.operator, self.result, self.evaluated, self.strategy, self.duration
        )
    }
}

impl StructuredLog for EvaluationCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            operator = %self.operator,
            strategy = self.strategy,
            evaluated = self.evaluated,
            result = self.result,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "evaluation_completed",
            span_name = name,
            operator = %self.operator,
            strategy = self.strategy,
            result = self.result,
            duration = ?self.duration,
        )
    }
}

/// Evaluation of an operator settled with a failure.
///
/// # Log Level
/// `debug!` - The failure belongs to the caller
pub struct EvaluationFailed<'a> {
    pub operator: Operator,
    pub strategy: &'a str,
    /// Index of the failing term, when a single term is known to be responsible
    pub index: Option<usize>,
    /// See `ConnectiveError::kind`
    pub error_kind: &'a str,
}

impl Display for EvaluationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(
                f,
                "'{}' failed at term {} with {} strategy: {}",
                self.operator, index, self.strategy, self.error_kind
            ),
            None => write!(
                f,
                "'{}' failed with {} strategy: {}",
                self.operator, self.strategy, self.error_kind
            ),
        }
    }
}

impl StructuredLog for EvaluationFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            operator = %self.operator,
            strategy = self.strategy,
            index = ?self.index,
            error_kind = self.error_kind,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "evaluation_failed",
            span_name = name,
            operator = %self.operator,
            strategy = self.strategy,
            error_kind = self.error_kind,
        )
    }
}

/// A term was reduced to a value or a future.
///
/// # Log Level
/// `trace!` - Fires once per term
pub struct TermNormalized<'a> {
    /// Shape the term ended up as after unrolling callables
    pub shape: &'a str,
    /// Number of callables invoked to reach it
    pub thunk_depth: usize,
}

impl Display for TermNormalized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Term normalized to {} after {} callable invocations",
            self.shape, self.thunk_depth
        )
    }
}

impl StructuredLog for TermNormalized<'_> {
    fn log(&self) {
        tracing::trace!(
            shape = self.shape,
            thunk_depth = self.thunk_depth,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "term_normalized",
            span_name = name,
            shape = self.shape,
            thunk_depth = self.thunk_depth,
        )
    }
}

/// A chain of callables hit the configured depth limit.
///
/// # Log Level
/// `warn!` - Usually a runaway term
pub struct DepthLimitExceeded {
    pub limit: usize,
}

impl Display for DepthLimitExceeded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Term nesting exceeded the depth limit of {}; remaining callables were not invoked",
            self.limit
        )
    }
}

impl StructuredLog for DepthLimitExceeded {
    fn log(&self) {
        tracing::warn!(limit = self.limit, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("depth_limit_exceeded", span_name = name, limit = self.limit)
    }
}
