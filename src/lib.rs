// Core infrastructure modules
pub mod core {
    pub mod errors;
}

// The five sequence-processing components
pub mod fallback; // first-success chains
pub mod identity; // collection equality & hashing
pub mod ordering; // dependency-respecting ordering
pub mod parallel; // bounded-concurrency iteration
pub mod transact; // apply-with-rollback batches

// Re-exports for convenience
pub use crate::core::errors::{Result, SeqflowError};
pub use fallback::first_success;
pub use identity::{
    sequenced_equals, sequenced_equals_by_key, sequenced_hash, sequenced_hash_by_key,
    unsequenced_equals, unsequenced_equals_by_key, unsequenced_hash, unsequenced_hash_by_key,
};
pub use ordering::sort_by_dependencies;
pub use parallel::{
    for_each_parallel, for_each_with_action, ElementAction, IterationReport, ParallelConfig,
};
pub use transact::apply_with_rollback;
