//! This library provides a single-threaded, fulfill-once future with synchronous observer notification
//!
//! A future starts out empty, is fulfilled exactly once by its owner, and notifies every subscribed [`Handler`]:
//! handlers subscribed before fulfillment are invoked in registration order when the future is fulfilled, handlers
//! subscribed afterwards are invoked immediately within `subscribe`.
//!
//! There are two flavors:
//!  - [`SignalFuture`] only signals that something happened
//!  - [`ValueFuture`] additionally carries a value
//!
//! Both owning handles implement [`Fulfill`]; consumers should only ever receive an [`Observed`] view, which
//! implements [`Observable`] but cannot fulfill the future.
//!
//! # Example
//! ```
//! use observable_future::{Fulfill, Handler, Observable, ValueFuture};
//! use std::{cell::RefCell, rc::Rc};
//!
//! let future = ValueFuture::new();
//! let observed = future.observe();
//!
//! let seen = Rc::new(RefCell::new(None));
//! observed.subscribe(Handler::new({
//!     let seen = Rc::clone(&seen);
//!     move |value: &String| *seen.borrow_mut() = Some(value.clone())
//! }));
//!
//! future.fulfill("done".to_string()).expect("Failed to fulfill future");
//! assert_eq!(seen.borrow().as_deref(), Some("done"));
//! assert_eq!(observed.value().as_deref(), Ok("done"));
//! ```
//!
//! The handles are deliberately `!Send` and `!Sync`: everything runs synchronously on the thread that owns the
//! future, e.g. a single update loop.

mod cell;
mod error;
mod future;
mod handler;
mod observable;
mod slot;

pub use crate::{
    error::{FutureError, Result},
    future::{Fulfill, SignalFuture, ValueFuture},
    handler::Handler,
    observable::{Observable, Observed},
    slot::{clear_and_fulfill_if_unfulfilled, Slot},
};

/// Creates a new value future together with a read-only view onto it
pub fn new<T>() -> (ValueFuture<T>, Observed<T>) {
    let future = ValueFuture::new();
    let observed = future.observe();
    (future, observed)
}

/// Creates a new signal future together with a read-only view onto it
pub fn signal() -> (SignalFuture, Observed<()>) {
    let future = SignalFuture::new();
    let observed = future.observe();
    (future, observed)
}
