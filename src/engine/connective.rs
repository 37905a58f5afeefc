// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures_util::future::BoxFuture;
use futures_util::{FutureExt, TryFutureExt};

use crate::config::EvaluatorOptions;
use crate::engine::factory::EvaluatorFactory;
use crate::errors::Outcome;
use crate::term::{Operator, Reduction, Term};

/// Entry point for the five connectives with explicit evaluator options.
///
/// Every method collects its terms when called and returns a boxed `Send` future.
/// Nothing is evaluated, and no error is reported, until that future is polled: an
/// empty argument list surfaces as `ConnectiveError::NoTerms` from the future, never
/// as a panic or an early return. No state is carried between calls.
///
/// The crate-level [`and`](crate::and), [`or`](crate::or), [`not`](crate::not),
/// [`some`](crate::some) and [`every`](crate::every) functions use
/// `Connective::default()`.
///
/// # Examples
///
/// ```
/// use connective::config::EvaluatorOptions;
/// use connective::{BoxError, Connective, Term};
///
/// # tokio_test_block(async {
/// let connective = Connective::new(EvaluatorOptions::with_max_depth(8));
///
/// let ready = connective
///     .and(vec![
///         Term::<BoxError>::value(true),
///         Term::lazy(|| Term::infallible(async { 1 })),
///     ])
///     .await
///     .unwrap();
/// assert!(ready);
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Runtime::new().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Connective {
    options: EvaluatorOptions,
}

impl Connective {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Evaluate `terms` under any operator.
    ///
    /// For `Operator::Not` only the first term is used; any others are dropped
    /// without being evaluated.
    pub fn evaluate<'a, E, I>(&self, operator: Operator, terms: I) -> BoxFuture<'a, Outcome<E>>
    where
        E: Send + 'static,
        I: IntoIterator<Item = Term<'a, E>>,
    {
        let mut terms: Vec<Term<'a, E>> = terms.into_iter().collect();
        let evaluator = EvaluatorFactory::for_operator::<E>(operator, &self.options);

        match operator.reduction() {
            Reduction::Negation => {
                terms.truncate(1);
                async move { evaluator.evaluate(operator, terms).await }
                    .map_ok(|value| !value)
                    .boxed()
            }
            Reduction::Serial | Reduction::Parallel => {
                async move { evaluator.evaluate(operator, terms).await }.boxed()
            }
        }
    }

    /// Serial AND: stops at the first `false` or failure.
    pub fn and<'a, E, I>(&self, terms: I) -> BoxFuture<'a, Outcome<E>>
    where
        E: Send + 'static,
        I: IntoIterator<Item = Term<'a, E>>,
    {
        self.evaluate(Operator::And, terms)
    }

    /// Serial OR: stops at the first `true` or failure.
    pub fn or<'a, E, I>(&self, terms: I) -> BoxFuture<'a, Outcome<E>>
    where
        E: Send + 'static,
        I: IntoIterator<Item = Term<'a, E>>,
    {
        self.evaluate(Operator::Or, terms)
    }

    /// Inverts a single term. `None` fails with `NoTerms`.
    pub fn not<'a, E, T>(&self, term: T) -> BoxFuture<'a, Outcome<E>>
    where
        E: Send + 'static,
        T: Into<Option<Term<'a, E>>>,
    {
        let term: Option<Term<'a, E>> = term.into();
        self.evaluate(Operator::Not, term)
    }

    /// Parallel OR: runs every term, true if any is true.
    pub fn some<'a, E, I>(&self, terms: I) -> BoxFuture<'a, Outcome<E>>
    where
        E: Send + 'static,
        I: IntoIterator<Item = Term<'a, E>>,
    {
        self.evaluate(Operator::Some, terms)
    }

    /// Parallel AND: runs every term, true if all are true.
    pub fn every<'a, E, I>(&self, terms: I) -> BoxFuture<'a, Outcome<E>>
    where
        E: Send + 'static,
        I: IntoIterator<Item = Term<'a, E>>,
    {
        self.evaluate(Operator::Every, terms)
    }
}

/// `Connective::default().and(terms)`
pub fn and<'a, E, I>(terms: I) -> BoxFuture<'a, Outcome<E>>
where
    E: Send + 'static,
    I: IntoIterator<Item = Term<'a, E>>,
{
    Connective::default().and(terms)
}

/// `Connective::default().or(terms)`
pub fn or<'a, E, I>(terms: I) -> BoxFuture<'a, Outcome<E>>
where
    E: Send + 'static,
    I: IntoIterator<Item = Term<'a, E>>,
{
    Connective::default().or(terms)
}

/// `Connective::default().not(term)`
pub fn not<'a, E, T>(term: T) -> BoxFuture<'a, Outcome<E>>
where
    E: Send + 'static,
    T: Into<Option<Term<'a, E>>>,
{
    Connective::default().not(term)
}

/// `Connective::default().some(terms)`
pub fn some<'a, E, I>(terms: I) -> BoxFuture<'a, Outcome<E>>
where
    E: Send + 'static,
    I: IntoIterator<Item = Term<'a, E>>,
{
    Connective::default().some(terms)
}

/// `Connective::default().every(terms)`
pub fn every<'a, E, I>(terms: I) -> BoxFuture<'a, Outcome<E>>
where
    E: Send + 'static,
    I: IntoIterator<Item = Term<'a, E>>,
{
    Connective::default().every(terms)
}
