//! Bounded-parallel asynchronous iteration.
//!
//! A counting gate (a semaphore of `max_parallel` permits) is acquired
//! before an element's action is launched and released when that action
//! settles, so the number of in-flight actions never exceeds the cap.
//! Settled outcomes flow back to the coordinating loop over an unbounded
//! channel.

use std::future::Future;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, error, info, warn};

use super::config::ParallelConfig;
use crate::core::errors::{Result, SeqflowError};

/// Summary of a fully successful bounded-parallel run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationReport {
    /// Number of element actions launched
    pub scheduled: usize,
    /// Number of element actions that completed successfully
    pub completed: usize,
    pub started_at: NaiveDateTime,
    pub finished_at: NaiveDateTime,
}

/// One element action's terminal state, as seen by the coordinating loop.
struct Settled {
    index: usize,
    result: anyhow::Result<()>,
}

fn record(settled: Settled, completed: &mut usize, first_error: &mut Option<(usize, anyhow::Error)>) {
    match settled.result {
        Ok(()) => *completed += 1,
        Err(e) => {
            if first_error.is_none() {
                warn!(
                    "element {} failed, no further elements will be scheduled",
                    settled.index
                );
                *first_error = Some((settled.index, e));
            } else {
                error!("element {} failed after the first error: {:#}", settled.index, e);
            }
        }
    }
}

/// Runs `action` for every element with at most `config.max_parallel`
/// actions in flight at once. Each element is scheduled exactly once;
/// completion order is unspecified.
///
/// Failure policy is first-error-wins: once any element's action fails, no
/// further element is scheduled, actions already in flight run to
/// completion, and the first observed failure is surfaced as
/// [`SeqflowError::ElementActionFailed`] after everything has settled.
/// Later failures are logged only.
///
/// The call must run under a tokio runtime; when none is current it fails
/// fast with [`SeqflowError::InvalidSchedulingContext`] before any element
/// is scheduled.
pub async fn for_each_parallel<T, F, Fut>(
    items: impl IntoIterator<Item = T>,
    config: &ParallelConfig,
    action: F,
) -> Result<IterationReport>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    config.validate()?;
    if tokio::runtime::Handle::try_current().is_err() {
        return Err(SeqflowError::invalid_scheduling_context(
            "no async runtime is current; bounded-parallel iteration needs concurrent dispatch",
        ));
    }

    let started_at = chrono::Local::now().naive_local();
    let gate = Arc::new(Semaphore::new(config.max_parallel));
    let action = Arc::new(action);
    let (tx, mut rx) = mpsc::unbounded_channel::<Settled>();

    let mut scheduled = 0usize;
    let mut completed = 0usize;
    let mut first_error: Option<(usize, anyhow::Error)> = None;

    for (index, item) in items.into_iter().enumerate() {
        // a free permit both caps the in-flight count and paces this loop
        let permit = gate
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| SeqflowError::internal("concurrency gate closed"))?;

        // settle anything that finished while we waited, so a failure is
        // observed before the next element is committed
        while let Ok(settled) = rx.try_recv() {
            record(settled, &mut completed, &mut first_error);
        }
        if first_error.is_some() {
            drop(permit);
            break;
        }

        let tx = tx.clone();
        let action = action.clone();
        scheduled += 1;
        debug!("launching element {} ({} scheduled)", index, scheduled);
        tokio::spawn(async move {
            let result = action(item).await;
            drop(permit); // release the gate on every exit path
            let _ = tx.send(Settled { index, result });
        });
    }

    // input exhausted or scheduling halted: let in-flight actions settle
    drop(tx);
    while let Some(settled) = rx.recv().await {
        record(settled, &mut completed, &mut first_error);
    }

    if let Some((index, source)) = first_error {
        return Err(SeqflowError::element_action_failed(index, source));
    }

    let finished_at = chrono::Local::now().naive_local();
    info!(
        "parallel iteration complete: {} scheduled, {} completed",
        scheduled, completed
    );
    Ok(IterationReport {
        scheduled,
        completed,
        started_at,
        finished_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_report_counts_every_element() {
        let touched = Arc::new(AtomicUsize::new(0));
        let counter = touched.clone();

        let report = for_each_parallel(0..10u32, &ParallelConfig::default(), move |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                anyhow::Ok(())
            }
        })
        .await
        .unwrap();

        assert_eq!(report.scheduled, 10);
        assert_eq!(report.completed, 10);
        assert_eq!(touched.load(Ordering::SeqCst), 10);
        assert!(report.started_at <= report.finished_at);
    }

    #[tokio::test]
    async fn test_invalid_config_fails_before_scheduling() {
        let touched = Arc::new(AtomicUsize::new(0));
        let counter = touched.clone();

        let err = for_each_parallel(0..10u32, &ParallelConfig::with_max_parallel(0), move |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                anyhow::Ok(())
            }
        })
        .await
        .unwrap_err();

        assert_eq!(err.category(), "configuration");
        assert_eq!(touched.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_input_reports_zero() {
        let report = for_each_parallel(
            Vec::<u32>::new(),
            &ParallelConfig::default(),
            |_| async move { anyhow::Ok(()) },
        )
        .await
        .unwrap();
        assert_eq!(report.scheduled, 0);
        assert_eq!(report.completed, 0);
    }
}
