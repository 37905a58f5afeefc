// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::EvaluatorOptions;
use crate::engine::normalize::Normalizer;
use crate::engine::parallel::ParallelEvaluator;
use crate::engine::serial::SerialEvaluator;
use crate::term::{Operator, Reduction};
use crate::traits::TermEvaluator;

/// Factory for creating term evaluators from evaluator options
pub struct EvaluatorFactory;

impl EvaluatorFactory {
    /// Create the evaluator an operator reduces its terms with.
    ///
    /// `not` is evaluated serially over its single term; the caller inverts the result.
    pub fn for_operator<E>(
        operator: Operator,
        options: &EvaluatorOptions,
    ) -> Box<dyn TermEvaluator<E>>
    where
        E: Send + 'static,
    {
        let normalizer = Normalizer::new(options.effective_max_depth());

        match operator.reduction() {
            Reduction::Serial | Reduction::Negation => Box::new(SerialEvaluator::new(normalizer)),
            Reduction::Parallel => Box::new(ParallelEvaluator::new(normalizer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BoxError;

    #[test]
    fn test_strategy_per_operator() {
        let options = EvaluatorOptions::default();
        let name = |op| EvaluatorFactory::for_operator::<BoxError>(op, &options).name();

        assert_eq!(name(Operator::And), "serial");
        assert_eq!(name(Operator::Or), "serial");
        assert_eq!(name(Operator::Not), "serial");
        assert_eq!(name(Operator::Some), "parallel");
        assert_eq!(name(Operator::Every), "parallel");
    }
}
