// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five logical connectives.
///
/// # Variants
/// * `And` - serial conjunction, stops at the first `false`
/// * `Or` - serial disjunction, stops at the first `true`
/// * `Not` - unary negation
/// * `Some` - parallel disjunction, every term is evaluated
/// * `Every` - parallel conjunction, every term is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    And,
    Or,
    Not,
    Some,
    Every,
}

/// How an operator walks its terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// One term at a time, left to right, stopping once the result is decided.
    Serial,
    /// All terms launched at once, all results awaited.
    Parallel,
    /// A single term, inverted.
    Negation,
}

/// How individual term results combine into the operator's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Junction {
    /// Logical AND of all results.
    All,
    /// Logical OR of all results.
    Any,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Some,
        Operator::Every,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::Some => "some",
            Operator::Every => "every",
        }
    }

    pub fn reduction(self) -> Reduction {
        match self {
            Operator::And | Operator::Or => Reduction::Serial,
            Operator::Some | Operator::Every => Reduction::Parallel,
            Operator::Not => Reduction::Negation,
        }
    }

    /// `Not` only ever sees one term, and a lone term reduces to itself under
    /// either junction, so it is reported as `All`.
    pub fn junction(self) -> Junction {
        match self {
            Operator::And | Operator::Every | Operator::Not => Junction::All,
            Operator::Or | Operator::Some => Junction::Any,
        }
    }
}

impl Junction {
    /// Result of the junction over zero results seen so far.
    pub fn identity(self) -> bool {
        match self {
            Junction::All => true,
            Junction::Any => false,
        }
    }

    /// Whether a single term result fixes the overall result.
    pub fn is_decided_by(self, value: bool) -> bool {
        match self {
            Junction::All => !value,
            Junction::Any => value,
        }
    }

    pub fn fold(self, results: &[bool]) -> bool {
        match self {
            Junction::All => results.iter().all(|v| *v),
            Junction::Any => results.iter().any(|v| *v),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a string does not name a connective.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator '{0}' (expected one of: and, or, not, some, every)")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseOperatorError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_per_operator() {
        assert_eq!(Operator::And.reduction(), Reduction::Serial);
        assert_eq!(Operator::Or.reduction(), Reduction::Serial);
        assert_eq!(Operator::Some.reduction(), Reduction::Parallel);
        assert_eq!(Operator::Every.reduction(), Reduction::Parallel);
        assert_eq!(Operator::Not.reduction(), Reduction::Negation);
    }

    #[test]
    fn test_junction_decisions() {
        assert!(Junction::All.is_decided_by(false));
        assert!(!Junction::All.is_decided_by(true));
        assert!(Junction::Any.is_decided_by(true));
        assert!(!Junction::Any.is_decided_by(false));

        assert!(!Junction::All.fold(&[true, false, true]));
        assert!(Junction::Any.fold(&[true, false, true]));
        assert!(Junction::All.fold(&[true, true]));
        assert!(!Junction::Any.fold(&[false, false]));
    }

    #[test]
    fn test_parse_round_trips_names() {
        for op in Operator::ALL {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
        assert_eq!(" EVERY ".parse::<Operator>(), Ok(Operator::Every));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "xor".parse::<Operator>().unwrap_err();
        assert_eq!(err, ParseOperatorError("xor".to_string()));
        assert!(err.to_string().contains("xor"));
    }

    #[test]
    fn test_deserialize_snake_case() {
        let ops: Vec<Operator> = serde_yaml::from_str("[and, or, not, some, every]").unwrap();
        assert_eq!(ops, Operator::ALL.to_vec());
    }
}
