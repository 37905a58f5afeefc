// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Asynchronous logical connectives.
//!
//! `and`, `or`, `not`, `some` and `every` combine terms that may be plain values,
//! deferred callables or futures, and settle to a single `bool`:
//!
//! * `and` / `or` evaluate in order and stop as soon as the answer is known
//! * `some` / `every` start every term and wait for all of them
//! * `not` inverts a single term
//!
//! ```
//! use connective::{and, BoxError, Term};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let ready = and(vec![
//!     Term::<BoxError>::value(true),
//!     Term::lazy(|| Term::infallible(async { "pong" })),
//! ])
//! .await
//! .unwrap();
//! assert!(ready);
//! # });
//! ```

pub mod config;         // check files + loader
pub mod engine;         // evaluators
pub mod errors;         // error handling
mod macros;
pub mod observability;
pub mod term;           // term model + truthiness
pub mod traits;         // evaluator seam

pub use engine::{and, every, not, or, some, Connective};
pub use errors::{BoxError, ConnectiveError, Outcome};
pub use term::{Operator, Term, Truthy};
