//! Conditions for conditional event handlers.
//!
//! A condition decides, each time a [`ConditionalEventHandler`] is asked to
//! handle an event, whether the wrapped callable runs.
//!
//! ## Key Components
//!
//! - [`Condition`]: The capability every condition implements
//! - [`PeriodicCondition`]: True once every `freq` evaluations
//! - [`FnCondition`]: Any closure returning a bool
//!
//! ## Shared State
//!
//! Conditions are held through `Rc<dyn Condition>`. If the same instance is
//! attached to several handlers, they all advance the same internal state;
//! build separate instances when independent behavior is wanted.
//!
//! ## Example Usage
//!
//! ```
//! use minevent::conditions::{Condition, PeriodicCondition};
//!
//! let condition = PeriodicCondition::new(3).unwrap();
//! let fired: Vec<bool> = (0..6).map(|_| condition.evaluate().unwrap()).collect();
//! assert_eq!(fired, [false, false, true, false, false, true]);
//! ```
//!
//! [`ConditionalEventHandler`]: crate::handlers::ConditionalEventHandler

mod function;
mod periodic;

pub use function::FnCondition;
pub use periodic::PeriodicCondition;

use std::fmt;

use crate::core::AsAny;

/// A predicate consulted by conditional handlers.
///
/// `evaluate` may mutate internal state (through interior mutability) and
/// may fail; failures propagate to whoever triggered the handler.
pub trait Condition: AsAny + fmt::Display {
    /// Evaluate the condition given its current state.
    fn evaluate(&self) -> anyhow::Result<bool>;

    /// Compare with another condition.
    ///
    /// Conditions of different concrete types are never equal.
    fn equal(&self, other: &dyn Condition) -> bool;
}

impl fmt::Debug for dyn Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
