pub mod connective;
pub mod factory;
pub mod normalize;
pub mod parallel;
pub mod serial;

pub use connective::{and, every, not, or, some, Connective};
pub use factory::EvaluatorFactory;
pub use normalize::{NormalizedTerm, Normalizer};
pub use parallel::ParallelEvaluator;
pub use serial::SerialEvaluator;
