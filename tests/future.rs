use observable_future::{Fulfill, FutureError, Handler, Observable, ValueFuture};
use std::{cell::RefCell, rc::Rc};

/// Creates a handler that records every value it receives into `log`, tagged with `tag`
fn recording(tag: &'static str, log: &Rc<RefCell<Vec<(&'static str, String)>>>) -> Handler<String> {
    let log = Rc::clone(log);
    Handler::new(move |value: &String| log.borrow_mut().push((tag, value.clone())))
}

#[test]
fn unfulfilled() {
    let future = ValueFuture::<String>::new();

    assert!(!future.is_fulfilled(), "Fresh future is fulfilled");
    assert_eq!(future.value(), Err(FutureError::Unfulfilled), "Fresh future has a value");
    assert_eq!(future.value_ref(), Err(FutureError::Unfulfilled), "Fresh future has a value");
}

#[test]
fn prefulfilled() {
    let future = ValueFuture::fulfilled("test".to_string());

    assert!(future.is_fulfilled(), "Prefulfilled future is not fulfilled");
    assert_eq!(future.value().as_deref(), Ok("test"), "Future has invalid value");
}

#[test]
fn fulfill() {
    let future = ValueFuture::new();
    future.fulfill("test".to_string()).expect("Failed to fulfill future");

    assert!(future.is_fulfilled(), "Future is not fulfilled");
    assert_eq!(future.value().as_deref(), Ok("test"), "Future has invalid value");
}

#[test]
fn fulfill_twice() {
    let log = Rc::default();
    let future = ValueFuture::new();
    future.subscribe(recording("a", &log));
    future.fulfill("first".to_string()).expect("Failed to fulfill future");

    // The second attempt must neither replace the value nor notify again
    let result = future.fulfill("second".to_string());
    assert_eq!(result, Err(FutureError::AlreadyFulfilled), "Duplicate fulfillment was accepted");
    assert_eq!(future.value().as_deref(), Ok("first"), "Duplicate fulfillment replaced the value");
    assert_eq!(*log.borrow(), vec![("a", "first".to_string())], "Duplicate fulfillment notified again");
}

#[test]
fn notify_in_order() {
    let log = Rc::default();
    let future = ValueFuture::new();
    future.subscribe(recording("a", &log));
    future.subscribe(recording("b", &log));
    future.subscribe(recording("c", &log));

    future.fulfill("test".to_string()).expect("Failed to fulfill future");
    let expected = vec![("a", "test".to_string()), ("b", "test".to_string()), ("c", "test".to_string())];
    assert_eq!(*log.borrow(), expected, "Handlers were not notified in registration order");
}

#[test]
fn subscribe_after_fulfillment() {
    let log = Rc::default();
    let future = ValueFuture::fulfilled("x".to_string());

    // The handler must have run before `subscribe` returns
    future.subscribe(recording("late", &log));
    assert_eq!(*log.borrow(), vec![("late", "x".to_string())], "Late handler was not invoked inline");
}

#[test]
fn subscribe_during_notification() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let future = Rc::new(ValueFuture::new());
    let late = recording("late", &log);

    future.subscribe(Handler::new({
        let (future, log, late) = (Rc::clone(&future), Rc::clone(&log), late.clone());
        move |value: &String| {
            log.borrow_mut().push(("outer", value.clone()));
            future.subscribe(late.clone());
            log.borrow_mut().push(("outer-done", value.clone()));
        }
    }));
    future.subscribe(recording("after", &log));

    future.fulfill("v".to_string()).expect("Failed to fulfill future");
    let expected = vec![
        ("outer", "v".to_string()),
        ("late", "v".to_string()),
        ("outer-done", "v".to_string()),
        ("after", "v".to_string()),
    ];
    assert_eq!(*log.borrow(), expected, "Reentrant subscription was not dispatched inline exactly once");
}

#[test]
fn unsubscribe_before_fulfillment() {
    let log = Rc::default();
    let future = ValueFuture::new();
    let a = recording("a", &log);
    let b = recording("b", &log);
    future.subscribe(a.clone());
    future.subscribe(b);

    future.unsubscribe(&a);
    future.fulfill("test".to_string()).expect("Failed to fulfill future");
    assert_eq!(*log.borrow(), vec![("b", "test".to_string())], "Unsubscribed handler was invoked");
}

#[test]
fn unsubscribe_unknown_handler() {
    let log = Rc::default();
    let future = ValueFuture::new();
    future.subscribe(recording("a", &log));

    // An identical but distinct handler must not remove the registered one
    future.unsubscribe(&recording("a", &log));
    future.fulfill("test".to_string()).expect("Failed to fulfill future");
    assert_eq!(log.borrow().len(), 1, "Registered handler was removed by a distinct handler");
}

#[test]
fn unsubscribe_after_fulfillment() {
    let log = Rc::default();
    let future = ValueFuture::fulfilled("test".to_string());
    let handler = recording("a", &log);
    future.subscribe(handler.clone());

    future.unsubscribe(&handler);
    assert!(future.is_fulfilled(), "Unsubscribe altered the future");
    assert_eq!(log.borrow().len(), 1, "Late handler was not invoked exactly once");
}

#[test]
fn value_or_default() {
    let text = ValueFuture::<String>::new();
    assert_eq!(text.value_or_default(), "", "Unfulfilled future has no neutral value");

    let number = ValueFuture::<u64>::new();
    assert_eq!(number.value_or_default(), 0, "Unfulfilled future has no neutral value");

    number.fulfill(7).expect("Failed to fulfill future");
    assert_eq!(number.value_or_default(), 7, "Fulfilled future has invalid value");
}

#[test]
fn value_is_a_copy() {
    let future = ValueFuture::fulfilled(vec![1, 2, 3]);

    // Mutating the returned copy must not affect other readers
    let mut copy = future.value().expect("Future has no value");
    copy.push(4);
    assert_eq!(future.value_ref(), Ok(&vec![1, 2, 3]), "Stored value was mutated through a copy");
}

#[test]
fn observed_view() {
    let (future, observed) = observable_future::new::<u32>();
    let other = observed.clone();
    assert!(observed.ptr_eq(&other), "Cloned view observes another future");
    assert!(!observed.ptr_eq(&ValueFuture::<u32>::new().observe()), "Distinct futures compare equal");

    future.fulfill(42).expect("Failed to fulfill future");
    assert!(other.is_fulfilled(), "View did not observe fulfillment");
    assert_eq!(other.value(), Ok(42), "View has invalid value");
}

#[test]
fn observed_view_outlives_owner() {
    let log = Rc::default();
    let (future, observed) = observable_future::new();
    observed.subscribe(recording("a", &log));

    future.fulfill("test".to_string()).expect("Failed to fulfill future");
    drop(future);
    assert_eq!(observed.value().as_deref(), Ok("test"), "View lost the value");
}

#[test]
fn debug_is_opaque() {
    let future = ValueFuture::fulfilled("secret".to_string());
    let debug = format!("{future:?} {:?}", future.observe());
    assert!(!debug.contains("secret"), "Debug output leaks the value");
}
