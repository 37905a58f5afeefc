// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use futures_util::stream::{FuturesUnordered, StreamExt};
use futures_util::FutureExt;
use std::time::Instant;
use tracing::Instrument;

use crate::engine::normalize::Normalizer;
use crate::errors::{ConnectiveError, Outcome};
use crate::observability::messages::engine::{
    EvaluationCompleted, EvaluationFailed, EvaluationStarted,
};
use crate::observability::messages::StructuredLog;
use crate::term::{Operator, Term};
use crate::traits::evaluator::TermEvaluator;

const STRATEGY: &str = "parallel";

/// Full-evaluation evaluator used by `some` and `every`.
///
/// ## Execution Strategy
///
/// 1. **Launch**: every term is normalized up front, so every callable runs before
///    any future is awaited
/// 2. **Gather**: all normalized futures are polled together on the current task
///    until every one of them has settled
/// 3. **Reduce**: results are folded with the operator's junction (OR for `some`,
///    AND for `every`)
///
/// No term is skipped, whatever the earlier results are.
///
/// ## Failures
///
/// A failure does not stop sibling terms: every launched future is still driven
/// to completion, and the evaluation settles only once all of them have. The
/// failure reported is the first one to settle. Later failures and all successes
/// are discarded. When several terms fail, which one wins depends on completion
/// order and is not deterministic; callers should only rely on *a* failure being
/// surfaced.
///
/// A single term skips the gather and resolves to its own value.
pub struct ParallelEvaluator {
    normalizer: Normalizer,
}

impl ParallelEvaluator {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }
}

impl Default for ParallelEvaluator {
    fn default() -> Self {
        Self::new(Normalizer::default())
    }
}

#[async_trait]
impl<E> TermEvaluator<E> for ParallelEvaluator
where
    E: Send + 'static,
{
    async fn evaluate<'a>(&self, operator: Operator, mut terms: Vec<Term<'a, E>>) -> Outcome<E> {
        let term_count = terms.len();
        let lone = match term_count {
            0 => {
                let error = ConnectiveError::NoTerms { operator };
                EvaluationFailed {
                    operator,
                    strategy: STRATEGY,
                    index: None,
                    error_kind: error.kind(),
                }
                .log();
                return Err(error);
            }
            1 => terms.pop(),
            _ => None,
        };

        let started = EvaluationStarted {
            operator,
            strategy: STRATEGY,
            term_count,
        };
        started.log();
        let span = started.span(STRATEGY);

        async move {
            let begin = Instant::now();

            let (result, failed_at) = match lone {
                Some(term) => (self.normalizer.normalize(term).await, Some(0)),
                None => {
                    let mut pending: FuturesUnordered<_> = terms
                        .into_iter()
                        .enumerate()
                        .map(|(index, term)| {
                            self.normalizer.normalize(term).map(move |result| (index, result))
                        })
                        .collect();

                    let mut results = Vec::with_capacity(term_count);
                    let mut first_failure = None;
                    while let Some((index, result)) = pending.next().await {
                        match result {
                            Ok(value) => results.push(value),
                            Err(error) if first_failure.is_none() => {
                                first_failure = Some((index, error));
                            }
                            Err(_) => {}
                        }
                    }

                    match first_failure {
                        Some((index, error)) => (Err(error), Some(index)),
                        None => (Ok(operator.junction().fold(&results)), None),
                    }
                }
            };

            match &result {
                Ok(value) => EvaluationCompleted {
                    operator,
                    strategy: STRATEGY,
                    evaluated: term_count,
                    result: *value,
                    duration: begin.elapsed(),
                }
                .log(),
                Err(error) => EvaluationFailed {
                    operator,
                    strategy: STRATEGY,
                    index: failed_at,
                    error_kind: error.kind(),
                }
                .log(),
            }
            result
        }
        .instrument(span)
        .await
    }

    fn name(&self) -> &'static str {
        STRATEGY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BoxError;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::Barrier;

    fn stub(value: bool, calls: &Arc<AtomicUsize>) -> Term<'static, BoxError> {
        let calls = Arc::clone(calls);
        Term::lazy(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Term::infallible(async move { value })
        })
    }

    fn counters(n: usize) -> Vec<Arc<AtomicUsize>> {
        (0..n).map(|_| Arc::new(AtomicUsize::new(0))).collect()
    }

    fn counts(calls: &[Arc<AtomicUsize>]) -> Vec<usize> {
        calls.iter().map(|c| c.load(Ordering::SeqCst)).collect()
    }

    #[tokio::test]
    async fn test_empty_terms_fail_with_no_terms() {
        let result: Outcome<BoxError> = ParallelEvaluator::default()
            .evaluate(Operator::Some, Vec::new())
            .await;
        assert!(result.unwrap_err().is_no_terms());
    }

    #[tokio::test]
    async fn test_some_invokes_every_term() {
        let calls = counters(3);
        let terms = vec![
            stub(true, &calls[0]),
            stub(false, &calls[1]),
            stub(true, &calls[2]),
        ];

        let result = ParallelEvaluator::default()
            .evaluate(Operator::Some, terms)
            .await;
        assert!(result.unwrap());
        assert_eq!(counts(&calls), vec![1, 1, 1]);
    }

    #[tokio::test]
    async fn test_every_invokes_every_term() {
        let calls = counters(3);
        let terms = vec![
            stub(true, &calls[0]),
            stub(false, &calls[1]),
            stub(true, &calls[2]),
        ];

        let result = ParallelEvaluator::default()
            .evaluate(Operator::Every, terms)
            .await;
        assert!(!result.unwrap());
        assert_eq!(counts(&calls), vec![1, 1, 1]);
    }

    #[tokio::test]
    async fn test_all_callables_run_before_any_future_finishes() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let terms: Vec<Term<'static, BoxError>> = (0..3)
            .map(|id| {
                let log = Arc::clone(&log);
                Term::lazy(move || {
                    log.lock().unwrap().push(format!("start {}", id));
                    Term::infallible(async move {
                        log.lock().unwrap().push(format!("end {}", id));
                        true
                    })
                })
            })
            .collect();

        let result = ParallelEvaluator::default()
            .evaluate(Operator::Every, terms)
            .await;
        assert!(result.unwrap());

        let log = log.lock().unwrap();
        assert_eq!(&log[..3], &["start 0", "start 1", "start 2"]);
        assert_eq!(log.len(), 6);
    }

    #[tokio::test]
    async fn test_terms_make_progress_concurrently() {
        // Each term waits for all three to arrive, which can only happen if they
        // are polled together.
        let barrier = Arc::new(Barrier::new(3));
        let terms: Vec<Term<'static, BoxError>> = (0..3)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                Term::infallible(async move {
                    barrier.wait().await;
                    true
                })
            })
            .collect();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            ParallelEvaluator::default().evaluate(Operator::Every, terms),
        )
        .await
        .expect("terms were not polled concurrently");
        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn test_a_failure_is_surfaced() {
        let calls = counters(2);
        let terms = vec![
            stub(true, &calls[0]),
            Term::rejected(BoxError::from("first")),
            Term::rejected(BoxError::from("second")),
            stub(true, &calls[1]),
        ];

        let err = ParallelEvaluator::default()
            .evaluate(Operator::Some, terms)
            .await
            .unwrap_err();
        // Both fail on their first poll; which one settles first is not deterministic.
        let message = err.to_string();
        assert!(message == "first" || message == "second");
        assert_eq!(counts(&calls), vec![1, 1]);
    }

    #[tokio::test]
    async fn test_failure_waits_for_siblings_to_settle() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);
        let terms: Vec<Term<'static, BoxError>> = vec![
            Term::infallible(async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                flag.store(true, Ordering::SeqCst);
                true
            }),
            Term::rejected(BoxError::from("down")),
        ];

        let result = ParallelEvaluator::default()
            .evaluate(Operator::Every, terms)
            .await;
        assert_eq!(result.unwrap_err().to_string(), "down");
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_first_settled_failure_is_reported() {
        let terms: Vec<Term<'static, String>> = vec![
            Term::future(async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Err::<bool, _>("slow".to_string())
            }),
            Term::rejected("fast".to_string()),
        ];

        let err = ParallelEvaluator::default()
            .evaluate(Operator::Some, terms)
            .await
            .unwrap_err();
        assert_eq!(err.into_term_error(), Some("fast".to_string()));
    }

    #[tokio::test]
    async fn test_failing_callable_does_not_skip_other_callables() {
        let calls = counters(3);
        let failing = Arc::clone(&calls[1]);
        let terms: Vec<Term<'static, String>> = vec![
            Term::lazy({
                let calls = Arc::clone(&calls[0]);
                move || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Term::value(true)
                }
            }),
            Term::try_lazy(move || {
                failing.fetch_add(1, Ordering::SeqCst);
                Err("cannot open socket".to_string())
            }),
            Term::lazy({
                let calls = Arc::clone(&calls[2]);
                move || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Term::infallible(async { true })
                }
            }),
        ];

        let err = ParallelEvaluator::default()
            .evaluate(Operator::Every, terms)
            .await
            .unwrap_err();
        assert_eq!(err.into_term_error(), Some("cannot open socket".to_string()));
        assert_eq!(counts(&calls), vec![1, 1, 1]);
    }

    #[tokio::test]
    async fn test_single_term_resolves_to_its_truthiness() {
        let calls = counters(1);
        let result = ParallelEvaluator::default()
            .evaluate(Operator::Every, vec![stub(false, &calls[0])])
            .await;
        assert!(!result.unwrap());
        assert_eq!(counts(&calls), vec![1]);

        let result: Outcome<BoxError> = ParallelEvaluator::default()
            .evaluate(Operator::Some, vec![Term::value(Some(1))])
            .await;
        assert!(result.unwrap());
    }
}
