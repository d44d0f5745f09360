//! Conditional event handler.

use std::fmt;
use std::rc::Rc;

use crate::conditions::Condition;
use crate::core::{Args, Callback, Keywords, Result, Value};

use super::bound::BoundCall;
use super::Handler;

/// Calls a function with bound arguments only when its condition
/// evaluates to true.
///
/// The condition is evaluated exactly once per `handle` call. Sharing one
/// condition between several handlers shares its state.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use minevent::conditions::PeriodicCondition;
/// use minevent::core::{Args, Callback};
/// use minevent::handlers::{ConditionalEventHandler, Handler};
///
/// let count = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&count);
/// let cb = Callback::new(move |_: &Args| {
///     sink.set(sink.get() + 1);
///     Ok(())
/// });
///
/// let handler = ConditionalEventHandler::new(cb, Rc::new(PeriodicCondition::new(3).unwrap()));
/// for _ in 0..4 {
///     handler.handle().unwrap();
/// }
/// assert_eq!(count.get(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ConditionalEventHandler {
    call: BoundCall,
    condition: Rc<dyn Condition>,
}

impl ConditionalEventHandler {
    /// Create a conditional handler with no bound arguments.
    pub fn new(handler: Callback, condition: Rc<dyn Condition>) -> Self {
        Self::with_args(handler, condition, Args::new())
    }

    /// Create a conditional handler with bound arguments.
    pub fn with_args(handler: Callback, condition: Rc<dyn Condition>, args: Args) -> Self {
        Self {
            call: BoundCall::new(handler, args),
            condition,
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

    /// The condition.
    #[must_use]
    pub fn condition(&self) -> &Rc<dyn Condition> {
        &self.condition
    }
}

impl Handler for ConditionalEventHandler {
    fn handle(&self) -> Result<()> {
        if !self.condition.evaluate()? {
            tracing::trace!(condition = %self.condition, "condition false, skipping handler");
            return Ok(());
        }
        tracing::trace!(handler = %self.call.handler, "running conditional event handler");
        self.call.call()
    }

    fn equal(&self, other: &dyn Handler) -> bool {
        other
            .as_any()
            .downcast_ref::<ConditionalEventHandler>()
            .is_some_and(|other| {
                self.call == other.call && self.condition.equal(&*other.condition)
            })
    }
}

impl fmt::Display for ConditionalEventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let condition = ("condition", self.condition.to_string());
        f.write_str(&self.call.render("ConditionalEventHandler", Some(condition)))
    }
}
