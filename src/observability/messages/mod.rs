// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `engine` - evaluation lifecycle of the connective operators
//! * `config` - configuration loading and check runs
//!
//! # Usage Pattern
//!
//! ```rust
//! use connective::observability::messages::engine::ShortCircuited;
//! use connective::Operator;
//!
//! let msg = ShortCircuited {
//!     operator: Operator::Or,
//!     index: 1,
//!     value: true,
//!     skipped: 2,
//! };
//!
//! tracing::debug!("{}", msg);
//! ```

use std::fmt::Display;
use tracing::Span;

pub mod config;
pub mod engine;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
