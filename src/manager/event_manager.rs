//! Event name to handler registry.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::core::render;
use crate::core::{Error, Result};
use crate::handlers::Handler;

/// Registry of event handlers.
///
/// Handlers are shared (`Rc`), not copied: the same instance may be
/// registered under several events, and removing it from one event leaves
/// the others untouched. An event with no handlers is absent from the
/// registry.
///
/// All methods take `&self`, so a handler may hold a (weak) reference to
/// its manager and trigger events, add or remove handlers from inside its
/// own execution. Dispatch iterates over the handler list as it was when
/// the trigger started. Lookups decide by the stored handler's
/// [`Handler::equal`], which must not call back into the manager.
///
/// The manager is single-threaded (`!Send`, `!Sync`).
#[derive(Default)]
pub struct EventManager {
    /// Handlers per event, in registration order.
    event_handlers: RefCell<FxHashMap<String, Vec<Rc<dyn Handler>>>>,

    /// Name of the most recently triggered event.
    last_triggered_event: RefCell<Option<String>>,
}

impl EventManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the last triggered event, or `None` if nothing has been
    /// triggered since creation or the last reset.
    #[must_use]
    pub fn last_triggered_event(&self) -> Option<String> {
        self.last_triggered_event.borrow().clone()
    }

    /// Append a handler to an event.
    ///
    /// No deduplication: adding an equal handler twice registers two
    /// entries, and both run on trigger.
    pub fn add_event_handler(&self, event: impl Into<String>, handler: Rc<dyn Handler>) {
        let event = event.into();
        tracing::debug!(%event, %handler, "adding event handler");
        self.event_handlers
            .borrow_mut()
            .entry(event)
            .or_default()
            .push(handler);
    }

    /// Check whether a handler equal to `handler` is registered.
    ///
    /// With `Some(event)` only that event is searched; with `None` every
    /// event is. Unknown events simply return `false`.
    #[must_use]
    pub fn has_event_handler(&self, handler: &dyn Handler, event: Option<&str>) -> bool {
        let event_handlers = self.event_handlers.borrow();
        let matches = |handlers: &Vec<Rc<dyn Handler>>| {
            handlers
                .iter()
                .any(|stored| stored.equal(handler))
        };
        match event {
            Some(event) => event_handlers.get(event).is_some_and(matches),
            None => event_handlers.values().any(matches),
        }
    }

    /// Remove every handler of `event` equal to `handler`.
    ///
    /// The event is dropped entirely once its last handler is removed.
    ///
    /// # Errors
    ///
    /// - [`Error::EventNotFound`] if the event has no handlers
    /// - [`Error::HandlerNotFound`] if none of its handlers equals `handler`
    pub fn remove_event_handler(&self, event: &str, handler: &dyn Handler) -> Result<()> {
        let removed = {
            let mut event_handlers = self.event_handlers.borrow_mut();
            let Some(handlers) = event_handlers.get_mut(event) else {
                return Err(Error::EventNotFound {
                    event: event.to_string(),
                });
            };

            let before = handlers.len();
            handlers.retain(|stored| !stored.equal(handler));
            let removed = before - handlers.len();
            if handlers.is_empty() {
                event_handlers.remove(event);
            }
            removed
        };

        // Registry borrow released: rendering may read the manager
        if removed == 0 {
            return Err(Error::HandlerNotFound {
                event: event.to_string(),
                handler: handler.to_string(),
            });
        }
        tracing::debug!(%event, %handler, removed, "removed event handler");
        Ok(())
    }

    /// Trigger an event.
    ///
    /// The last triggered event is updated first, whether or not the event
    /// has handlers. Handlers then run in registration order. The first
    /// error stops the dispatch; the remaining handlers do not run.
    pub fn trigger_event(&self, event: &str) -> Result<()> {
        *self.last_triggered_event.borrow_mut() = Some(event.to_string());

        // Snapshot so handlers can re-enter the manager
        let handlers = self.event_handlers.borrow().get(event).cloned();
        let Some(handlers) = handlers else {
            tracing::debug!(%event, "triggered event has no handlers");
            return Ok(());
        };

        tracing::debug!(%event, handlers = handlers.len(), "triggering event");
        for handler in &handlers {
            handler.handle()?;
        }
        Ok(())
    }

    /// Remove every handler and forget the last triggered event.
    pub fn reset(&self) {
        tracing::debug!("resetting event manager");
        self.event_handlers.borrow_mut().clear();
        *self.last_triggered_event.borrow_mut() = None;
    }

    /// Registered event names, sorted.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        let mut events: Vec<String> = self.event_handlers.borrow().keys().cloned().collect();
        events.sort_unstable();
        events
    }

    /// Handlers registered for an event, in registration order.
    #[must_use]
    pub fn handlers(&self, event: &str) -> Vec<Rc<dyn Handler>> {
        self.event_handlers
            .borrow()
            .get(event)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of handler entries for an event.
    #[must_use]
    pub fn handler_count(&self, event: &str) -> usize {
        self.event_handlers.borrow().get(event).map_or(0, Vec::len)
    }

    /// Check if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.event_handlers.borrow().is_empty()
    }
}

impl fmt::Debug for EventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventManager")
            .field("events", &self.events())
            .field("last_triggered_event", &self.last_triggered_event())
            .finish()
    }
}

impl fmt::Display for EventManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event_handlers = {
            let registry = self.event_handlers.borrow();
            let entries: Vec<(String, String)> = self
                .events()
                .into_iter()
                .map(|event| {
                    let handlers = registry
                        .get(&event)
                        .map(|hs| render::sequence(hs.iter().map(ToString::to_string)))
                        .unwrap_or_default();
                    (event, handlers)
                })
                .collect();
            render::mapping(entries)
        };
        let last = self
            .last_triggered_event()
            .map_or_else(|| "None".to_string(), |event| format!("{event:?}"));

        let event_handlers = if event_handlers.is_empty() {
            "{}".to_string()
        } else {
            format!("\n{event_handlers}")
        };
        let fields = render::mapping([
            ("event_handlers", event_handlers),
            ("last_triggered_event", last),
        ]);
        f.write_str(&render::object("EventManager", &fields))
    }
}
