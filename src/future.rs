//! Implements the owning future handles

use crate::{
    cell::State,
    error::Result,
    handler::Handler,
    observable::{Observable, Observed},
    slot,
};
use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

/// The owning capability of a future
///
/// Only the component that produces the result should hold a type implementing this trait; consumers get an
/// [`Observed`] view instead.
pub trait Fulfill<T>: Observable<T> {
    /// Fulfills the future with `value` and notifies all subscribed handlers in registration order
    ///
    /// Fails with [`AlreadyFulfilled`](crate::FutureError::AlreadyFulfilled) if the future has already been fulfilled;
    /// in that case neither the stored value nor any handler is touched.
    fn fulfill(&self, value: T) -> Result<()>;

    /// Creates a read-only view onto this future
    fn observe(&self) -> Observed<T>;
}

/// A future that carries a value of type `T` once fulfilled
pub struct ValueFuture<T> {
    /// The underlying state
    state: Rc<State<T>>,
}
impl<T> ValueFuture<T> {
    /// Creates a new, unfulfilled future
    pub fn new() -> Self {
        Self { state: Rc::new(State::new()) }
    }
    /// Creates a future that is already fulfilled with `value`
    pub fn fulfilled(value: T) -> Self {
        Self { state: Rc::new(State::fulfilled(value)) }
    }

    /// Fulfills the future referenced by `slot` with `value` unless it has already been fulfilled
    ///
    /// The slot is always left empty. Returns whether the future has been fulfilled by this call. See
    /// [`clear_and_fulfill_if_unfulfilled`](crate::clear_and_fulfill_if_unfulfilled).
    pub fn clear_and_fulfill_if_unfulfilled(slot: &mut Option<Self>, value: T) -> Result<bool> {
        slot::clear_and_fulfill_if_unfulfilled(slot, value)
    }
}
impl<T> Observable<T> for ValueFuture<T> {
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
impl<T> Fulfill<T> for ValueFuture<T> {
    fn fulfill(&self, value: T) -> Result<()> {
        self.state.fulfill(value)
    }
    fn observe(&self) -> Observed<T> {
        Observed::new(Rc::clone(&self.state))
    }
}
impl<T> Default for ValueFuture<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T> Debug for ValueFuture<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ValueFuture").field("state", &self.state).finish()
    }
}

/// A valueless future that only signals its fulfillment
///
/// Handlers for this future are usually created with [`Handler::signal`].
pub struct SignalFuture {
    /// The underlying state
    state: Rc<State<()>>,
}
impl SignalFuture {
    /// Creates a new, unfulfilled future
    pub fn new() -> Self {
        Self::new_with(false)
    }
    /// Creates a future that is already fulfilled
    pub fn fulfilled() -> Self {
        Self::new_with(true)
    }
    /// Creates a future that is fulfilled on construction if `already_fulfilled` is set
    pub fn new_with(already_fulfilled: bool) -> Self {
        let state = match already_fulfilled {
            true => State::fulfilled(()),
            false => State::new(),
        };
        Self { state: Rc::new(state) }
    }

    /// Fulfills the future and notifies all subscribed handlers in registration order
    ///
    /// Fails with [`AlreadyFulfilled`](crate::FutureError::AlreadyFulfilled) if the future has already been fulfilled.
    pub fn fulfill(&self) -> Result<()> {
        self.state.fulfill(())
    }

    /// Fulfills the future referenced by `slot` unless it has already been fulfilled
    ///
    /// The slot is always left empty. Returns whether the future has been fulfilled by this call. See
    /// [`clear_and_fulfill_if_unfulfilled`](crate::clear_and_fulfill_if_unfulfilled).
    pub fn clear_and_fulfill_if_unfulfilled(slot: &mut Option<Self>) -> Result<bool> {
        slot::clear_and_fulfill_if_unfulfilled(slot, ())
    }
}
impl Observable<()> for SignalFuture {
    fn is_fulfilled(&self) -> bool {
        self.state.is_fulfilled()
    }
    fn subscribe(&self, handler: Handler<()>) {
        self.state.subscribe(handler)
    }
    fn unsubscribe(&self, handler: &Handler<()>) {
        self.state.unsubscribe(handler)
    }
    fn value_ref(&self) -> Result<&()> {
        self.state.get()
    }
}
impl Fulfill<()> for SignalFuture {
    fn fulfill(&self, value: ()) -> Result<()> {
        self.state.fulfill(value)
    }
    fn observe(&self) -> Observed<()> {
        Observed::new(Rc::clone(&self.state))
    }
}
impl Default for SignalFuture {
    fn default() -> Self {
        Self::new()
    }
}
impl Debug for SignalFuture {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("SignalFuture").field("state", &self.state).finish()
    }
}
