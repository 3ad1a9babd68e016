//! Implements the fulfillment handler

use std::{
    fmt::{self, Debug, Formatter},
    rc::Rc,
};

/// A callback invoked once a future is fulfilled
///
/// Handlers compare by identity: a handler equals its own clones, but two handlers created from identical closures
/// are distinct. This is what [`Observable::unsubscribe`](crate::Observable::unsubscribe) matches on.
pub struct Handler<T> {
    /// The callback
    callback: Rc<dyn Fn(&T)>,
}
impl<T> Handler<T> {
    /// Creates a new handler from a callback that receives the fulfilled value
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&T) + 'static,
    {
        Self { callback: Rc::new(callback) }
    }

    /// Invokes the handler
    pub(in crate) fn call(&self, value: &T) {
        (self.callback)(value)
    }
}
impl Handler<()> {
    /// Creates a new handler for a signal future from a callback without arguments
    pub fn signal<F>(callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self::new(move |_: &()| callback())
    }
}
impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self { callback: Rc::clone(&self.callback) }
    }
}
impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        // Compare the data pointers only; vtable pointers are not guaranteed to be unique
        Rc::as_ptr(&self.callback) as *const u8 == Rc::as_ptr(&other.callback) as *const u8
    }
}
impl<T> Eq for Handler<T> {}
impl<T> Debug for Handler<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Handler").field("callback", &Rc::as_ptr(&self.callback)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_are_equal() {
        let handler = Handler::<u8>::new(|_| {});
        assert_eq!(handler, handler.clone());
    }

    #[test]
    fn identical_closures_are_distinct() {
        let a = Handler::<u8>::new(|_| {});
        let b = Handler::<u8>::new(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn call_passes_value() {
        let seen = Rc::new(Cell::new(0));
        let handler = Handler::new({
            let seen = Rc::clone(&seen);
            move |value: &u32| seen.set(*value)
        });

        handler.call(&7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn signal_handler_ignores_unit() {
        let calls = Rc::new(Cell::new(0));
        let handler = Handler::signal({
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get() + 1)
        });

        handler.call(&());
        handler.call(&());
        assert_eq!(calls.get(), 2);
    }
}
