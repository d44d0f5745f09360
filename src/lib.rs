//! # minevent
//!
//! A minimal, synchronous, in-process event manager.
//!
//! Callers register handlers under named events and later trigger an event
//! by name; every handler registered for it runs, in registration order, on
//! the calling thread.
//!
//! ## Design Principles
//!
//! 1. **Synchronous**: No scheduler, no suspension points. `trigger_event`
//!    returns once every handler has run or the first one has failed.
//!
//! 2. **Transparent Faults**: Errors from caller-supplied functions and
//!    conditions are returned unchanged. There is no isolation between
//!    handlers of the same event.
//!
//! 3. **Shared, Not Copied**: Handlers and conditions live behind `Rc`. The
//!    same handler may be registered under several events, and a condition
//!    shared between handlers shares its state.
//!
//! ## Modules
//!
//! - `core`: Errors, argument values, callables, configuration
//! - `conditions`: Conditions for conditional handlers
//! - `handlers`: Plain and conditional event handlers
//! - `manager`: The event manager
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use minevent::{Args, Callback, ConditionalEventHandler, EventManager, PeriodicCondition};
//!
//! let saved = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&saved);
//! let checkpoint = Callback::named("checkpoint", move |_: &Args| {
//!     sink.set(sink.get() + 1);
//!     Ok(())
//! });
//!
//! let manager = EventManager::new();
//! let every_other = Rc::new(PeriodicCondition::new(2)?);
//! manager.add_event_handler(
//!     "epoch_completed",
//!     Rc::new(ConditionalEventHandler::new(checkpoint, every_other)),
//! );
//!
//! for _ in 0..5 {
//!     manager.trigger_event("epoch_completed")?;
//! }
//! assert_eq!(saved.get(), 2);
//! # Ok::<(), minevent::Error>(())
//! ```

pub mod core;
pub mod conditions;
pub mod handlers;
pub mod manager;

// Re-export commonly used types
pub use crate::core::{
    Args, Callback, Error, PeriodicConfig, Result, StepPolicy, Value,
};

pub use crate::conditions::{Condition, FnCondition, PeriodicCondition};

pub use crate::handlers::{handlers_equal, ConditionalEventHandler, EventHandler, Handler};

pub use crate::manager::EventManager;
