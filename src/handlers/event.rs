//! Plain event handler.

use std::fmt;

use crate::core::{Args, Callback, Keywords, Result, Value};

use super::bound::BoundCall;
use super::Handler;

/// Calls a function with a fixed set of arguments every time it handles an
/// event.
///
/// Two event handlers are equal when they share the same function and have
/// equal arguments.
#[derive(Clone, Debug)]
pub struct EventHandler {
    call: BoundCall,
}

impl EventHandler {
    /// Create a handler with no bound arguments.
    pub fn new(handler: Callback) -> Self {
        Self::with_args(handler, Args::new())
    }

    /// Create a handler with bound arguments.
    pub fn with_args(handler: Callback, args: Args) -> Self {
        Self {
            call: BoundCall::new(handler, args),
        }
    }

    /// The wrapped function.
    #[must_use]
    pub fn handler(&self) -> &Callback {
        &self.call.handler
    }

    /// The bound argument bundle.
    #[must_use]
    pub fn args(&self) -> &Args {
        &self.call.args
    }

    /// Bound positional arguments.
    #[must_use]
    pub fn handler_args(&self) -> &[Value] {
        self.call.positional()
    }

    /// Bound keyword arguments.
    #[must_use]
    pub fn handler_kwargs(&self) -> &Keywords {
        self.call.keyword()
    }
}

impl Handler for EventHandler {
    fn handle(&self) -> Result<()> {
        tracing::trace!(handler = %self.call.handler, "running event handler");
        self.call.call()
    }

    fn equal(&self, other: &dyn Handler) -> bool {
        other
            .as_any()
            .downcast_ref::<EventHandler>()
            .is_some_and(|other| self.call == other.call)
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        self.call == other.call
    }
}

impl fmt::Display for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.call.render("EventHandler", None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Callback, Rc<RefCell<Vec<Args>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let cb = Callback::named("record", move |args: &Args| {
            sink.borrow_mut().push(args.clone());
            Ok(())
        });
        (cb, calls)
    }

    #[test]
    fn test_handle_passes_bound_args() {
        let (cb, calls) = recorder();
        let args = Args::new().arg(1).arg(2).kwarg("key", "value");
        let handler = EventHandler::with_args(cb, args.clone());

        handler.handle().unwrap();
        handler.handle().unwrap();

        assert_eq!(calls.borrow().len(), 2);
        assert_eq!(calls.borrow()[0], args);
    }

    #[test]
    fn test_accessors() {
        let (cb, _) = recorder();
        let handler = EventHandler::with_args(cb.clone(), Args::positional_only([5]).kwarg("a", true));

        assert_eq!(handler.handler(), &cb);
        assert_eq!(handler.handler_args(), &[Value::Int(5)]);
        assert_eq!(handler.handler_kwargs().get("a"), Some(&Value::Bool(true)));
        assert!(EventHandler::new(cb).args().is_empty());
    }

    #[test]
    fn test_equal() {
        let (cb, _) = recorder();
        let (other_cb, _) = recorder();

        let a = EventHandler::with_args(cb.clone(), Args::positional_only([1]));
        let b = EventHandler::with_args(cb.clone(), Args::positional_only([1]));
        assert!(a.equal(&b));
        assert!(b.equal(&a));
        assert_eq!(a, b);

        assert!(!a.equal(&EventHandler::with_args(cb.clone(), Args::positional_only([2]))));
        assert!(!a.equal(&EventHandler::with_args(cb, Args::positional_only([1]).kwarg("x", 0))));
        assert!(!a.equal(&EventHandler::with_args(other_cb, Args::positional_only([1]))));
    }

    #[test]
    fn test_fault_propagates() {
        let cb = Callback::new(|_: &Args| anyhow::bail!("handler failed"));
        let err = EventHandler::new(cb).handle().unwrap_err();

        assert!(matches!(err, Error::Fault(_)));
        assert_eq!(err.to_string(), "handler failed");
    }

    #[test]
    fn test_display() {
        let (cb, _) = recorder();
        let handler = EventHandler::with_args(cb, Args::positional_only([1, 2]));
        let text = handler.to_string();

        assert!(text.starts_with("EventHandler(\n  (handler): <fn record at "));
        assert!(text.contains("(handler_args): (1, 2)"));
        assert!(text.contains("(handler_kwargs): {}"));
        assert!(text.ends_with("\n)"));
    }
}
