//! First-success-wins fallback chains.

use tracing::warn;

use crate::core::errors::{Result, SeqflowError};

/// Runs `attempt` against each element in input order and stops at the first
/// success, returning its value.
///
/// Failures before the last element are logged and never surfaced. If every
/// attempt fails, the last element's error is returned as
/// [`SeqflowError::AllAttemptsFailed`]. Empty input is a silent no-op and
/// returns `Ok(None)`.
pub fn first_success<T, R>(
    items: &[T],
    mut attempt: impl FnMut(&T) -> anyhow::Result<R>,
) -> Result<Option<R>> {
    let last = items.len().checked_sub(1);

    for (index, item) in items.iter().enumerate() {
        match attempt(item) {
            Ok(value) => return Ok(Some(value)),
            Err(e) if Some(index) == last => {
                return Err(SeqflowError::all_attempts_failed(items.len(), e));
            }
            Err(e) => {
                warn!("fallback attempt {} failed, trying next: {:#}", index, e);
            }
        }
    }

    Ok(None)
}
