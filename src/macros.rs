// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Variadic forms of the connectives.
//!
//! Each macro accepts any expressions convertible into a [`Term`](crate::Term)
//! (a `Term` itself, a `bool`, or a boxed future of `Result<bool, E>`) and calls
//! the function of the same name.
//!
//! ```
//! use connective::{and, not, BoxError, Outcome, Term};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let online: Outcome<BoxError> = and![true, Term::infallible(async { "pong" })].await;
//! assert!(online.unwrap());
//!
//! let missing: Outcome<BoxError> = not![].await;
//! assert!(missing.unwrap_err().is_no_terms());
//! # });
//! ```

#[macro_export]
macro_rules! and {
    ($($term:expr),* $(,)?) => {
        $crate::and(::std::vec![$($crate::Term::from($term)),*])
    };
}

#[macro_export]
macro_rules! or {
    ($($term:expr),* $(,)?) => {
        $crate::or(::std::vec![$($crate::Term::from($term)),*])
    };
}

#[macro_export]
macro_rules! some {
    ($($term:expr),* $(,)?) => {
        $crate::some(::std::vec![$($crate::Term::from($term)),*])
    };
}

#[macro_export]
macro_rules! every {
    ($($term:expr),* $(,)?) => {
        $crate::every(::std::vec![$($crate::Term::from($term)),*])
    };
}

#[macro_export]
macro_rules! not {
    () => {
        $crate::not(::std::option::Option::None)
    };
    ($term:expr $(,)?) => {
        $crate::not(::std::option::Option::Some($crate::Term::from($term)))
    };
}
