//! Apply-with-rollback over an ordered sequence.

use tracing::{debug, error, warn};

use crate::core::errors::{Result, SeqflowError};

/// Applies `apply` to each element in order with all-or-nothing semantics.
///
/// On the first apply failure no further element is attempted and every
/// previously-succeeded element is rolled back in reverse order of
/// application; the failing element itself is not rolled back. Rollback
/// failures are logged and suppressed; they never interrupt the remaining
/// unwind and never replace the original error. After the unwind completes
/// the original apply error is surfaced as [`SeqflowError::ApplyFailed`].
///
/// If apply never fails, rollback is never invoked.
pub fn apply_with_rollback<T>(
    items: &[T],
    mut apply: impl FnMut(&T) -> anyhow::Result<()>,
    mut rollback: impl FnMut(&T) -> anyhow::Result<()>,
) -> Result<()> {
    // journal of indices whose apply succeeded, in application order
    let mut journal: Vec<usize> = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        match apply(item) {
            Ok(()) => {
                debug!("applied element {}", index);
                journal.push(index);
            }
            Err(apply_err) => {
                warn!(
                    "apply failed at element {}, rolling back {} element(s)",
                    index,
                    journal.len()
                );
                let rolled_back = journal.len();
                for &applied in journal.iter().rev() {
                    if let Err(e) = rollback(&items[applied]) {
                        // suppressed: the unwind keeps going and the apply error wins
                        error!("rollback failed for element {}: {:#}", applied, e);
                    }
                }
                return Err(SeqflowError::apply_failed(index, rolled_back, apply_err));
            }
        }
    }

    Ok(())
}
