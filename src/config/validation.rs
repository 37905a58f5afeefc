//! Configuration validation for check definitions and evaluator options.
//!
//! # Validation Pipeline
//!
//! Every stage runs and all errors are accumulated, so a single pass reports
//! everything wrong with a file:
//!
//! 1. **Evaluator Options**: `max_depth`, when set, must be within
//!    `MIN_MAX_DEPTH..=MAX_MAX_DEPTH`
//! 2. **Check Identity**: every check id is non-empty and unique
//! 3. **Arity**: `not` checks list at most one term
//!
//! A check with no terms is valid: it is a legitimate way to exercise the
//! `NoTerms` failure at run time.
//!
//! # Examples
//!
//! ```rust
//! use connective::config::{validate_config, CheckConfig, Config, TermConfig};
//! use connective::errors::ValidationError;
//! use connective::Operator;
//!
//! let config = Config {
//!     checks: vec![CheckConfig {
//!         id: "inverted".to_string(),
//!         operator: Operator::Not,
//!         terms: vec![TermConfig::default(), TermConfig::default()],
//!     }],
//!     ..Default::default()
//! };
//!
//! match validate_config(&config) {
//!     Ok(()) => unreachable!(),
//!     Err(errors) => assert!(matches!(
//!         errors[0],
//!         ValidationError::TooManyNegatedTerms { term_count: 2, .. }
//!     )),
//! }
//! ```

use crate::config::consts::{MAX_MAX_DEPTH, MIN_MAX_DEPTH};
use crate::config::Config;
use crate::errors::ValidationError;
use crate::term::Operator;
use std::collections::HashSet;

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(option_errors) = validate_evaluator_options(config) {
        errors.extend(option_errors);
    }

    if let Err(id_errors) = validate_check_ids(config) {
        errors.extend(id_errors);
    }

    if let Err(arity_errors) = validate_negation_arity(config) {
        errors.extend(arity_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_evaluator_options(config: &Config) -> Result<(), Vec<ValidationError>> {
    match config.evaluator.max_depth {
        Some(requested) if !(MIN_MAX_DEPTH..=MAX_MAX_DEPTH).contains(&requested) => {
            Err(vec![ValidationError::MaxDepthOutOfRange {
                requested,
                min: MIN_MAX_DEPTH,
                max: MAX_MAX_DEPTH,
            }])
        }
        _ => Ok(()),
    }
}

/// Check ids key the run reports, so they must be present and unique.
fn validate_check_ids(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut seen_ids = HashSet::new();
    let mut errors = Vec::new();

    for (index, check) in config.checks.iter().enumerate() {
        if check.id.trim().is_empty() {
            errors.push(ValidationError::EmptyCheckId { index });
        } else if !seen_ids.insert(check.id.as_str()) {
            errors.push(ValidationError::DuplicateCheckId {
                check_id: check.id.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_negation_arity(config: &Config) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<_> = config
        .checks
        .iter()
        .filter(|check| check.operator == Operator::Not && check.terms.len() > 1)
        .map(|check| ValidationError::TooManyNegatedTerms {
            check_id: check.id.clone(),
            term_count: check.terms.len(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CheckConfig, EvaluatorOptions, TermConfig};

    fn check(id: &str, operator: Operator, term_count: usize) -> CheckConfig {
        CheckConfig {
            id: id.to_string(),
            operator,
            terms: vec![TermConfig::default(); term_count],
        }
    }

    fn config(checks: Vec<CheckConfig>) -> Config {
        Config {
            evaluator: EvaluatorOptions::default(),
            checks,
        }
    }

    #[test]
    fn test_valid_empty_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_valid_checks() {
        let cfg = config(vec![
            check("a", Operator::And, 3),
            check("b", Operator::Not, 1),
            check("c", Operator::Some, 0),
        ]);
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_duplicate_check_ids() {
        let cfg = config(vec![
            check("a", Operator::And, 1),
            check("a", Operator::Or, 1),
        ]);
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateCheckId {
                check_id: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_check_id() {
        let cfg = config(vec![check("  ", Operator::Every, 1)]);
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyCheckId { index: 0 }]);
    }

    #[test]
    fn test_not_with_several_terms() {
        let cfg = config(vec![check("inverse", Operator::Not, 3)]);
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TooManyNegatedTerms {
                check_id: "inverse".to_string(),
                term_count: 3
            }]
        );
    }

    #[test]
    fn test_max_depth_out_of_range() {
        let cfg = Config {
            evaluator: EvaluatorOptions::with_max_depth(0),
            checks: vec![],
        };
        let errors = validate_config(&cfg).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::MaxDepthOutOfRange { requested: 0, .. }
        ));
    }

    #[test]
    fn test_multiple_errors() {
        let cfg = Config {
            evaluator: EvaluatorOptions::with_max_depth(MAX_MAX_DEPTH + 1),
            checks: vec![
                check("dup", Operator::And, 1),
                check("dup", Operator::Not, 2),
                check("", Operator::Or, 1),
            ],
        };
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
