// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The term model.
//!
//! A [`Term`] is one argument to a connective. It is an explicit sum type over the
//! three shapes a predicate can take:
//!
//! * `Value` - a literal, already coerced to `bool` through [`Truthy`]
//! * `Thunk` - a zero-argument callable producing another term, invoked only when
//!   the evaluator reaches it
//! * `Async` - a future producing a `bool` or failing with the caller's error type
//!
//! Building a term never runs anything. Thunks are `FnOnce`, so the engine can
//! invoke each of them at most once.

mod operator;
mod truthy;

pub use operator::{Junction, Operator, ParseOperatorError, Reduction};
pub use truthy::Truthy;

use crate::errors::BoxError;
use futures_util::future::{self, BoxFuture};
use futures_util::{FutureExt, TryFutureExt};
use std::fmt;
use std::future::Future;

/// A future resolving to a strict boolean or the term's own error.
pub type AsyncBool<'a, E> = BoxFuture<'a, Result<bool, E>>;

/// A deferred term. May fail before producing anything.
pub type Thunk<'a, E> = Box<dyn FnOnce() -> Result<Term<'a, E>, E> + Send + 'a>;

/// One argument to a connective.
pub enum Term<'a, E = BoxError> {
    Value(bool),
    Thunk(Thunk<'a, E>),
    Async(AsyncBool<'a, E>),
}

impl<'a, E: 'a> Term<'a, E> {
    /// A literal term, coerced through its truthiness now.
    pub fn value<T: Truthy>(value: T) -> Self {
        Term::Value(value.truthy())
    }

    /// A callable term. `f` runs when the term is normalized, never earlier.
    pub fn lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> Term<'a, E> + Send + 'a,
    {
        Term::Thunk(Box::new(move || Ok(f())))
    }

    /// A callable term whose invocation can itself fail.
    pub fn try_lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<Term<'a, E>, E> + Send + 'a,
    {
        Term::Thunk(Box::new(f))
    }

    /// An asynchronous term. The success value is coerced through its truthiness,
    /// a failure is kept as-is.
    pub fn future<F, T>(fut: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'a,
        T: Truthy,
    {
        Term::Async(fut.map_ok(|value| value.truthy()).boxed())
    }

    /// An asynchronous term that cannot fail.
    pub fn infallible<F>(fut: F) -> Self
    where
        F: Future + Send + 'a,
        F::Output: Truthy,
    {
        Term::Async(fut.map(|value| Ok(value.truthy())).boxed())
    }

    /// An asynchronous term that has already failed.
    pub fn rejected(error: E) -> Self
    where
        E: Send,
    {
        Term::Async(future::ready(Err(error)).boxed())
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Term::Value(_) => "value",
            Term::Thunk(_) => "thunk",
            Term::Async(_) => "async",
        }
    }
}

impl<E> From<bool> for Term<'_, E> {
    fn from(value: bool) -> Self {
        Term::Value(value)
    }
}

impl<'a, E> From<AsyncBool<'a, E>> for Term<'a, E> {
    fn from(fut: AsyncBool<'a, E>) -> Self {
        Term::Async(fut)
    }
}

impl<E> fmt::Debug for Term<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Term::Thunk(_) => f.write_str("Thunk(..)"),
            Term::Async(_) => f.write_str("Async(..)"),
        }
    }
}
