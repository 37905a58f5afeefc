// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::time::Instant;
use tracing::Instrument;

use crate::engine::normalize::Normalizer;
use crate::errors::{ConnectiveError, Outcome};
use crate::observability::messages::engine::{
    EvaluationCompleted, EvaluationFailed, EvaluationStarted, ShortCircuited,
};
use crate::observability::messages::StructuredLog;
use crate::term::{Operator, Term};
use crate::traits::evaluator::TermEvaluator;

const STRATEGY: &str = "serial";

/// Short-circuiting evaluator used by `and`, `or` and `not`.
///
/// Terms are normalized strictly one at a time, left to right: term *i + 1* is
/// not normalized (so none of its callables run) until term *i*'s future has
/// settled. The walk stops at the first result that decides the junction
/// (`false` for AND, `true` for OR) or at the first failure. Terms past the
/// stopping point are dropped without being touched.
///
/// A single term resolves to its own value.
pub struct SerialEvaluator {
    normalizer: Normalizer,
}

impl SerialEvaluator {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer }
    }
}

impl Default for SerialEvaluator {
    fn default() -> Self {
        Self::new(Normalizer::default())
    }
}

#[async_trait]
impl<E> TermEvaluator<E> for SerialEvaluator
where
    E: Send + 'static,
{
    async fn evaluate<'a>(&self, operator: Operator, terms: Vec<Term<'a, E>>) -> Outcome<E> {
        if terms.is_empty() {
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

        let started = EvaluationStarted {
            operator,
            strategy: STRATEGY,
            term_count: terms.len(),
        };
        started.log();
        let span = started.span(STRATEGY);

        async move {
            let begin = Instant::now();
            let term_count = terms.len();
            let junction = operator.junction();
            let mut value = junction.identity();
            let mut evaluated = 0;

            for (index, term) in terms.into_iter().enumerate() {
                evaluated += 1;
                value = match self.normalizer.normalize(term).await {
                    Ok(value) => value,
                    Err(error) => {
                        EvaluationFailed {
                            operator,
                            strategy: STRATEGY,
                            index: Some(index),
                            error_kind: error.kind(),
                        }
                        .log();
                        return Err(error);
                    }
                };

                if junction.is_decided_by(value) {
                    if index + 1 < term_count {
                        ShortCircuited {
                            operator,
                            index,
                            value,
                            skipped: term_count - index - 1,
                        }
                        .log();
                    }
                    break;
                }
            }

            EvaluationCompleted {
                operator,
                strategy: STRATEGY,
                evaluated,
                result: value,
                duration: begin.elapsed(),
            }
            .log();
            Ok(value)
        }
        .instrument(span)
        .await
    }

    fn name(&self) -> &'static str {
        STRATEGY
    }
}
