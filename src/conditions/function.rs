//! Closure-backed conditions.

use std::fmt;
use std::rc::Rc;

use super::Condition;

type PredicateFn = dyn Fn() -> anyhow::Result<bool>;

/// A condition backed by a closure.
///
/// Cloning shares the closure. Two closure conditions are equal only when
/// they share the same closure.
#[derive(Clone)]
pub struct FnCondition {
    predicate: Rc<PredicateFn>,
    name: Option<String>,
}

impl FnCondition {
    /// Wrap an infallible predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        Self::fallible(move || Ok(predicate()))
    }

    /// Wrap a predicate that may fail.
    pub fn fallible<F>(predicate: F) -> Self
    where
        F: Fn() -> anyhow::Result<bool> + 'static,
    {
        Self {
            predicate: Rc::new(predicate),
            name: None,
        }
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Condition for FnCondition {
    fn evaluate(&self) -> anyhow::Result<bool> {
        (self.predicate)()
    }

    fn equal(&self, other: &dyn Condition) -> bool {
        other
            .as_any()
            .downcast_ref::<FnCondition>()
            .is_some_and(|other| {
                std::ptr::addr_eq(Rc::as_ptr(&self.predicate), Rc::as_ptr(&other.predicate))
            })
    }
}

impl fmt::Debug for FnCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCondition").field("name", &self.name).finish()
    }
}

impl fmt::Display for FnCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "FnCondition({name})"),
            None => write!(f, "FnCondition(<fn at {:p}>)", Rc::as_ptr(&self.predicate) as *const ()),
        }
    }
}
