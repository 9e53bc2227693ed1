pub mod action;
pub mod config;
pub mod for_each;

pub use action::{for_each_with_action, ElementAction};
pub use config::ParallelConfig;
pub use for_each::{for_each_parallel, IterationReport};
