//! Implements the shared state behind every future handle

use crate::{
    error::{FutureError, Result},
    handler::Handler,
};
use smallvec::SmallVec;
use std::{
    any::Any,
    cell::{OnceCell, RefCell},
    fmt::{self, Debug, Formatter},
    mem,
    panic::{self, AssertUnwindSafe},
};

/// The observers registered before fulfillment
type Observers<T> = SmallVec<[Handler<T>; 4]>;

/// The shared state of a future
///
/// Invariants:
///  - `value` is written at most once, and being written is what "fulfilled" means
///  - once `value` is set, `observers` is empty: later subscriptions are dispatched inline instead of being queued
///
/// No `RefCell` borrow is held while a handler runs, so handlers may freely re-enter the state they are notified by.
pub(in crate) struct State<T> {
    /// The fulfillment value
    value: OnceCell<T>,
    /// The handlers awaiting fulfillment, in registration order
    observers: RefCell<Observers<T>>,
}
impl<T> State<T> {
    /// Creates a new, unfulfilled state
    pub fn new() -> Self {
        Self { value: OnceCell::new(), observers: RefCell::default() }
    }
    /// Creates a new state that is already fulfilled with `value`
    pub fn fulfilled(value: T) -> Self {
        Self { value: OnceCell::from(value), observers: RefCell::default() }
    }

    /// Whether the state has been fulfilled or not
    pub fn is_fulfilled(&self) -> bool {
        self.value.get().is_some()
    }
    /// The fulfillment value if any
    pub fn get(&self) -> Result<&T> {
        self.value.get().ok_or(FutureError::Unfulfilled)
    }
    /// The amount of queued observers
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Registers `handler`, or invokes it right away if the state is already fulfilled
    pub fn subscribe(&self, handler: Handler<T>) {
        match self.value.get() {
            Some(value) => {
                tracing::trace!("future already fulfilled; invoking handler inline");
                handler.call(value);
            }
            None => {
                let mut observers = self.observers.borrow_mut();
                observers.push(handler);
                tracing::trace!(observers = observers.len(), "queued fulfillment handler");
            }
        }
    }
    /// Removes the first registration of `handler`; a no-op if it is not registered or the state is fulfilled
    pub fn unsubscribe(&self, handler: &Handler<T>) {
        if self.is_fulfilled() {
            return;
        }

        let mut observers = self.observers.borrow_mut();
        if let Some(index) = observers.iter().position(|observer| observer == handler) {
            observers.remove(index);
            tracing::trace!(observers = observers.len(), "removed fulfillment handler");
        }
    }

    /// Stores `value` and notifies all queued observers in registration order
    ///
    /// A panicking observer does not keep the remaining observers from being notified; the first panic is resumed after
    /// the notification pass has completed and the observer list has been cleared.
    pub fn fulfill(&self, value: T) -> Result<()> {
        if self.value.set(value).is_err() {
            tracing::warn!("rejected duplicate fulfillment");
            return Err(FutureError::AlreadyFulfilled);
        }

        // Detach the observers before running any of them
        let observers = mem::take(&mut *self.observers.borrow_mut());
        tracing::trace!(observers = observers.len(), "future fulfilled");
        if let Some(value) = self.value.get() {
            Self::notify(value, observers);
        }
        Ok(())
    }

    /// Invokes every observer with `value`, isolating panics
    fn notify(value: &T, observers: Observers<T>) {
        let mut first_panic: Option<Box<dyn Any + Send>> = None;
        for (index, observer) in observers.into_iter().enumerate() {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| observer.call(value))) {
                tracing::error!(observer = index, "fulfillment handler panicked");
                first_panic.get_or_insert(payload);
            }
        }

        // Surface the failure to whoever fulfilled the future
        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }
    }
}
impl<T> Debug for State<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        // Get a debug representation for the value
        let value: &dyn Debug = match self.is_fulfilled() {
            true => &Some("<opaque>"),
            false => &Option::<&str>::None,
        };

        // The observers are not borrowable if we are formatted from within `subscribe`
        let observers = self.observers.try_borrow().map(|observers| observers.len()).ok();
        f.debug_struct("State").field("value", &value).field("observers", &observers).finish()
    }
}
