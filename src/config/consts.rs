/// Default number of nested callables unrolled for one term
pub const DEFAULT_MAX_DEPTH: usize = 32;
/// Minimum allowed callable depth
pub const MIN_MAX_DEPTH: usize = 1;
/// Maximum allowed callable depth - guards against runaway callable chains
pub const MAX_MAX_DEPTH: usize = 1024;
