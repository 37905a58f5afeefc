// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by the connective operators.

use crate::term::Operator;
use thiserror::Error;

/// Default error type carried by terms when the caller does not pick one.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The settled result of one operator call.
pub type Outcome<E = BoxError> = Result<bool, ConnectiveError<E>>;

/// Failure of a connective evaluation.
///
/// Term failures are carried verbatim in `Term`: the engine never wraps, maps or
/// swallows the caller's error, so `into_term_error` hands back the exact value a
/// callable or future failed with.
#[derive(Error, Debug)]
pub enum ConnectiveError<E> {
    /// The operator was called with nothing to evaluate.
    #[error("no terms supplied to '{operator}'")]
    NoTerms { operator: Operator },

    /// A chain of callables returning callables went deeper than allowed.
    #[error("term nesting exceeded the depth limit of {limit}")]
    DepthExceeded { limit: usize },

    /// A term's callable or future failed.
    #[error("{0}")]
    Term(E),
}

impl<E> ConnectiveError<E> {
    /// Short machine-readable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ConnectiveError::NoTerms { .. } => "no_terms",
            ConnectiveError::DepthExceeded { .. } => "depth_exceeded",
            ConnectiveError::Term(_) => "term",
        }
    }

    pub fn is_no_terms(&self) -> bool {
        matches!(self, ConnectiveError::NoTerms { .. })
    }

    pub fn term_error(&self) -> Option<&E> {
        match self {
            ConnectiveError::Term(error) => Some(error),
            _ => None,
        }
    }

    pub fn into_term_error(self) -> Option<E> {
        match self {
            ConnectiveError::Term(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err: ConnectiveError<String> = ConnectiveError::NoTerms {
            operator: Operator::Every,
        };
        assert_eq!(err.to_string(), "no terms supplied to 'every'");

        let err: ConnectiveError<String> = ConnectiveError::DepthExceeded { limit: 8 };
        assert_eq!(err.to_string(), "term nesting exceeded the depth limit of 8");

        let err = ConnectiveError::Term("disk unreachable".to_string());
        assert_eq!(err.to_string(), "disk unreachable");
    }

    #[test]
    fn test_term_error_is_returned_unchanged() {
        let err = ConnectiveError::Term(42u32);
        assert_eq!(err.kind(), "term");
        assert_eq!(err.term_error(), Some(&42));
        assert_eq!(err.into_term_error(), Some(42));

        let err: ConnectiveError<u32> = ConnectiveError::NoTerms {
            operator: Operator::Or,
        };
        assert!(err.is_no_terms());
        assert_eq!(err.into_term_error(), None);
    }
}
