//! Implements the read-only capability set of a future

use crate::{cell::State, error::Result, handler::Handler};
use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

/// The observable capabilities of a future
///
/// This is everything a consumer may do with a future. Fulfillment is withheld and only available through
/// [`Fulfill`](crate::Fulfill), which is implemented by the owning handles but not by [`Observed`].
pub trait Observable<T> {
    /// Whether the future has been fulfilled or not
    fn is_fulfilled(&self) -> bool;

    /// Registers a handler that is invoked once the future is fulfilled
    ///
    /// If the future is already fulfilled, the handler is invoked synchronously before this call returns and is not
    /// retained.
    fn subscribe(&self, handler: Handler<T>);
    /// Removes the first registration of `handler`
    ///
    /// This is a no-op if the handler is not registered or if the future has already been fulfilled.
    fn unsubscribe(&self, handler: &Handler<T>);

    /// Borrows the fulfillment value, or fails with [`Unfulfilled`](crate::FutureError::Unfulfilled)
    fn value_ref(&self) -> Result<&T>;
    /// A copy of the fulfillment value, or fails with [`Unfulfilled`](crate::FutureError::Unfulfilled)
    fn value(&self) -> Result<T>
    where
        T: Clone,
    {
        self.value_ref().cloned()
    }
    /// A copy of the fulfillment value, or `T::default()` if the future has not been fulfilled yet
    ///
    /// # Hazard
    /// This accessor cannot tell an unfulfilled future apart from one fulfilled with the default value. Only use it
    /// after fulfillment has been established by other means (e.g. from within a handler or after checking
    /// [`is_fulfilled`](Observable::is_fulfilled)); relying on it otherwise is a latent bug.
    fn value_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.value_ref().cloned().unwrap_or_default()
    }
}

/// A non-owning, read-only view onto a future
///
/// Views are cheap to clone and can be handed to any number of consumers; none of them can fulfill the future.
pub struct Observed<T> {
    /// The underlying state
    state: Rc<State<T>>,
}
impl<T> Observed<T> {
    /// Creates a new view onto `state`
    pub(in crate) const fn new(state: Rc<State<T>>) -> Self {
        Self { state }
    }

    /// Whether both views observe the same future
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}
impl<T> Observable<T> for Observed<T> {
    fn is_fulfilled(&self) -> bool {
        self.state.is_fulfilled()
    }
    fn subscribe(&self, handler: Handler<T>) {
        self.state.subscribe(handler)
    }
    fn unsubscribe(&self, handler: &Handler<T>) {
        self.state.unsubscribe(handler)
    }
    fn value_ref(&self) -> Result<&T> {
        self.state.get()
    }
}
impl<T> Clone for Observed<T> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}
impl<T> Debug for Observed<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Observed").field("state", &self.state).finish()
    }
}
