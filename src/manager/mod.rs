//! Event manager.
//!
//! The manager maps event names to ordered lists of handlers and runs them
//! when an event is triggered. An event is a case-sensitive string; any
//! string is accepted, including the empty one.
//!
//! ## Dispatch
//!
//! Triggering is synchronous: every handler registered for the event runs
//! on the calling thread, in registration order, before `trigger_event`
//! returns. The first handler error stops the dispatch and is returned to
//! the caller.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use minevent::core::{Args, Callback};
//! use minevent::handlers::EventHandler;
//! use minevent::manager::EventManager;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&log);
//! let hello = Callback::named("hello", move |_: &Args| {
//!     sink.borrow_mut().push("Hello!");
//!     Ok(())
//! });
//!
//! let manager = EventManager::new();
//! manager.add_event_handler("my_event", Rc::new(EventHandler::new(hello.clone())));
//! manager.trigger_event("my_event").unwrap();
//!
//! assert_eq!(*log.borrow(), ["Hello!"]);
//! assert_eq!(manager.last_triggered_event().as_deref(), Some("my_event"));
//! assert!(manager.has_event_handler(&EventHandler::new(hello), Some("my_event")));
//! ```

mod event_manager;

pub use event_manager::EventManager;
