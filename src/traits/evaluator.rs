// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::Outcome;
use crate::term::{Operator, Term};

/// A strategy for reducing a list of terms to one boolean.
///
/// Implementations decide *when* each term is normalized (one at a time, or all at
/// once) and combine results with the operator's junction. They must settle exactly
/// once per call and must never invoke a term's callable more than once.
#[async_trait]
pub trait TermEvaluator<E>: Send + Sync
where
    E: Send + 'static,
{
    /// Evaluate `terms` under `operator`.
    ///
    /// - `operator`: picks the junction (AND-like or OR-like) and labels logs
    /// - `terms`: the call's argument list, in call order
    ///
    /// Returns:
    /// - `Ok(bool)`: the reduced value
    /// - `Err(ConnectiveError::NoTerms)`: `terms` was empty
    /// - `Err(ConnectiveError::Term(e))`: a term failed with `e`
    async fn evaluate<'a>(&self, operator: Operator, terms: Vec<Term<'a, E>>) -> Outcome<E>;

    fn name(&self) -> &'static str;
}
