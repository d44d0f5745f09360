//! Event handlers.
//!
//! A handler runs some logic on demand and can be compared with other
//! handlers. The event manager stores handlers as `Rc<dyn Handler>`, so the
//! same instance can be registered under several events.
//!
//! ## Key Components
//!
//! - [`Handler`]: The capability every handler implements
//! - [`EventHandler`]: Calls a function with bound arguments
//! - [`ConditionalEventHandler`]: Same, but only when a condition holds
//! - [`handlers_equal`]: Comparator with optional difference logging
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use minevent::core::{Args, Callback};
//! use minevent::handlers::{EventHandler, Handler};
//!
//! let total = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&total);
//! let add = Callback::named("add", move |args: &Args| {
//!     let sum: i64 = args.positional().iter().filter_map(|v| v.as_int()).sum();
//!     sink.set(sink.get() + sum);
//!     Ok(())
//! });
//!
//! let handler = EventHandler::with_args(add, Args::positional_only([1, 2]));
//! handler.handle().unwrap();
//! assert_eq!(total.get(), 3);
//! ```

mod bound;
mod comparator;
mod conditional;
mod event;

pub use comparator::handlers_equal;
pub use conditional::ConditionalEventHandler;
pub use event::EventHandler;

use std::fmt;

use crate::core::{AsAny, Result};

/// Something that runs when an event is triggered.
pub trait Handler: AsAny + fmt::Display {
    /// Handle the event.
    ///
    /// Faults from caller-supplied code are returned as [`Error::Fault`]
    /// without modification.
    ///
    /// [`Error::Fault`]: crate::core::Error::Fault
    fn handle(&self) -> Result<()>;

    /// Compare with another handler.
    ///
    /// Handlers of different concrete types are never equal.
    fn equal(&self, other: &dyn Handler) -> bool;
}

impl fmt::Debug for dyn Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
