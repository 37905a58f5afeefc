// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::config::{CheckConfig, Config, TermConfig};
use crate::engine::Connective;
use crate::observability::messages::config::CheckCompleted;
use crate::observability::messages::StructuredLog;
use crate::term::{Operator, Term};

/// Error produced by a configured term with `fail` set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CheckFailure {
    pub message: String,
}

/// Result of running one configured check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub id: String,
    pub operator: Operator,
    /// The operator's value, or the failure message
    pub outcome: Result<bool, String>,
    /// How many `lazy` terms had their callable invoked
    pub invoked: usize,
    #[serde(skip)]
    pub duration: Duration,
}

/// Check runner - builds a [`Connective`] from configuration and runs each check.
///
/// This drives the operators from check files for the demo and the integration tests.
/// The operators never read configuration themselves; they only see the `Term`
/// values built here.
///
/// Declarative terms are turned into real terms when a check runs:
/// - `value` alone becomes a literal term
/// - `delay_ms` makes it an asynchronous term backed by a tokio timer
/// - `fail` makes it fail with a [`CheckFailure`] (after the delay, if any)
/// - `lazy` wraps it in a callable that counts its own invocation
///
/// Checks run one after another; each gets fresh terms.
///
/// # Examples
///
/// ```
/// use connective::config::{CheckRunner, parse_config, ConfigFormat};
///
/// let yaml = r#"
/// checks:
///   - id: gate
///     operator: and
///     terms:
///       - value: 0
///       - lazy: true
///         value: 1
/// "#;
/// let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
///
/// let runner = CheckRunner::from_config(&cfg);
/// let reports = tokio::runtime::Runtime::new().unwrap().block_on(runner.run());
///
/// assert_eq!(reports[0].outcome, Ok(false));
/// assert_eq!(reports[0].invoked, 0);
/// ```
pub struct CheckRunner {
    connective: Connective,
    checks: Vec<CheckConfig>,
}

impl CheckRunner {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            connective: Connective::new(cfg.evaluator.clone()),
            checks: cfg.checks.clone(),
        }
    }

    /// Run every configured check in order.
    pub async fn run(&self) -> Vec<CheckReport> {
        let mut reports = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            reports.push(self.run_check(check).await);
        }
        reports
    }

    pub async fn run_check(&self, check: &CheckConfig) -> CheckReport {
        let invoked = Arc::new(AtomicUsize::new(0));
        let terms: Vec<_> = check
            .terms
            .iter()
            .map(|term| build_term(term, &invoked))
            .collect();

        let started = Instant::now();
        let outcome = self
            .connective
            .evaluate(check.operator, terms)
            .await
            .map_err(|e| e.to_string());
        let duration = started.elapsed();

        let report = CheckReport {
            id: check.id.clone(),
            operator: check.operator,
            outcome,
            invoked: invoked.load(Ordering::SeqCst),
            duration,
        };

        let outcome_text = match &report.outcome {
            Ok(value) => value.to_string(),
            Err(message) => message.clone(),
        };
        CheckCompleted {
            check_id: &report.id,
            operator: report.operator,
            outcome: &outcome_text,
            invoked: report.invoked,
            duration,
        }
        .log();

        report
    }
}

fn build_term(config: &TermConfig, invoked: &Arc<AtomicUsize>) -> Term<'static, CheckFailure> {
    let value = config.value.clone();
    let failure = config.fail.clone().map(|message| CheckFailure { message });
    let delay = config.delay_ms.map(Duration::from_millis);

    let make = move || match (delay, failure) {
        (None, None) => Term::value(value),
        (None, Some(failure)) => Term::rejected(failure),
        (Some(delay), failure) => Term::future(async move {
            tokio::time::sleep(delay).await;
            match failure {
                Some(failure) => Err(failure),
                None => Ok(value),
            }
        }),
    };

    if config.lazy {
        let invoked = Arc::clone(invoked);
        Term::lazy(move || {
            invoked.fetch_add(1, Ordering::SeqCst);
            make()
        })
    } else {
        make()
    }
}
