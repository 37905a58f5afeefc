pub mod evaluator;

pub use evaluator::TermEvaluator;
