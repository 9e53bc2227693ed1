//! Object-safe action seam for bounded-parallel iteration.
//!
//! Closures are the primary form; this trait exists for callers that prefer
//! an injected strategy value with a name that shows up in logs.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::config::ParallelConfig;
use super::for_each::{for_each_parallel, IterationReport};
use crate::core::errors::Result;

/// An element action as a named strategy value.
#[async_trait]
pub trait ElementAction<T: Send + 'static>: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str {
        "element_action"
    }

    /// Runs the action against one element
    async fn run(&self, element: T) -> anyhow::Result<()>;
}

/// [`for_each_parallel`] over a trait-object action.
pub async fn for_each_with_action<T: Send + 'static>(
    items: impl IntoIterator<Item = T>,
    config: &ParallelConfig,
    action: Arc<dyn ElementAction<T>>,
) -> Result<IterationReport> {
    debug!("iterating with action '{}'", action.name());
    for_each_parallel(items, config, move |element| {
        let action = Arc::clone(&action);
        async move { action.run(element).await }
    })
    .await
}
