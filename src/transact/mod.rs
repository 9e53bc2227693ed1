pub mod applier;

pub use applier::apply_with_rollback;
