// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures_util::future::{self, BoxFuture};
use futures_util::{FutureExt, TryFutureExt};

use crate::config::consts::DEFAULT_MAX_DEPTH;
use crate::errors::{ConnectiveError, Outcome};
use crate::observability::messages::engine::{DepthLimitExceeded, TermNormalized};
use crate::observability::messages::StructuredLog;
use crate::term::Term;

/// A term reduced to a future of a strict boolean.
pub type NormalizedTerm<'a, E> = BoxFuture<'a, Outcome<E>>;

/// Turns any [`Term`] into a [`NormalizedTerm`].
///
/// ## Rules, in order
/// 1. `Async` - passed through; its error is lifted into `ConnectiveError::Term` unchanged
/// 2. `Thunk` - invoked right now, and its result normalized again
/// 3. `Value` - wrapped in an already-resolved future
///
/// Callables are unrolled in a loop rather than by recursion. At most `max_depth`
/// callables are invoked for one term; the next one is dropped uninvoked and the
/// term fails with `ConnectiveError::DepthExceeded`.
///
/// Every callable the term leads to has already run when `normalize` returns. The
/// returned future only waits on the term's asynchronous part, if any.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    max_depth: usize,
}

impl Normalizer {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn normalize<'a, E>(&self, term: Term<'a, E>) -> NormalizedTerm<'a, E>
    where
        E: Send + 'a,
    {
        let mut current = term;
        let mut depth = 0;

        loop {
            let shape = current.shape();
            match current {
                Term::Value(value) => {
                    TermNormalized {
                        shape,
                        thunk_depth: depth,
                    }
                    .log();
                    return future::ready(Ok(value)).boxed();
                }
                Term::Async(fut) => {
                    TermNormalized {
                        shape,
                        thunk_depth: depth,
                    }
                    .log();
                    return fut.map_err(ConnectiveError::Term).boxed();
                }
                Term::Thunk(thunk) => {
                    if depth == self.max_depth {
                        DepthLimitExceeded {
                            limit: self.max_depth,
                        }
                        .log();
                        return future::ready(Err(ConnectiveError::DepthExceeded {
                            limit: self.max_depth,
                        }))
                        .boxed();
                    }
                    depth += 1;
                    current = match thunk() {
                        Ok(next) => next,
                        Err(error) => {
                            return future::ready(Err(ConnectiveError::Term(error))).boxed()
                        }
                    };
                }
            }
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
