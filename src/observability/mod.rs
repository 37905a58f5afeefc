// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic event emitted by the crate is a small struct with a `Display`
//! implementation and a [`messages::StructuredLog`] implementation, so log text
//! and structured fields live in one place instead of as strings scattered
//! through the engine.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - operator evaluation, short-circuiting and normalization events
//! * `messages::config` - configuration loading and check execution events
//!
//! # Usage
//!
//! ```rust
//! use connective::observability::messages::StructuredLog;
//! use connective::observability::messages::engine::EvaluationStarted;
//! use connective::Operator;
//!
//! let msg = EvaluationStarted {
//!     operator: Operator::And,
//!     strategy: "serial",
//!     term_count: 3,
//! };
//!
//! msg.log();
//! ```
//!
//! The library only emits events. Installing a subscriber is left to the binary,
//! see `demos/yaml_connective_demo.rs`.

pub mod messages;
