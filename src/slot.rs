//! Implements the clear-and-fulfill helper for pending-completion slots

use crate::{error::Result, future::Fulfill};

/// A producer's bookkeeping slot for a pending future
///
/// A cancellation path empties the slot; a completion path passes it to [`clear_and_fulfill_if_unfulfilled`].
pub type Slot<F> = Option<F>;

/// Fulfills the future held by `slot` with `value` unless it has already been fulfilled, and empties the slot
///
/// Returns `Ok(true)` if the future has been fulfilled by this call, and `Ok(false)` if the slot was empty or the
/// future had already been fulfilled (in which case `value` is dropped and the future is left untouched).
///
/// The slot is emptied before fulfillment is attempted, so even if fulfillment fails or a handler panics, the slot no
/// longer references the future.
pub fn clear_and_fulfill_if_unfulfilled<F, T>(slot: &mut Slot<F>, value: T) -> Result<bool>
where
    F: Fulfill<T>,
{
    // Detach the future first
    let Some(future) = slot.take() else {
        return Ok(false);
    };

    // Skip futures that have been fulfilled elsewhere
    if future.is_fulfilled() {
        tracing::trace!("slot future already fulfilled; skipping");
        return Ok(false);
    }

    future.fulfill(value)?;
    tracing::trace!("fulfilled slot future");
    Ok(true)
}
