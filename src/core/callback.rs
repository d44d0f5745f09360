//! Shared callable wrapper.
//!
//! A [`Callback`] is a reference to a caller-supplied function. Cloning a
//! callback shares the function; two callbacks are equal only when they
//! point at the same function allocation. The optional name is used for
//! rendering and never takes part in equality.

use std::fmt;
use std::rc::Rc;

use super::value::Args;

/// Signature of the functions wrapped by handlers.
type CallbackFn = dyn Fn(&Args) -> anyhow::Result<()>;

/// A shared, identity-compared reference to a handler function.
#[derive(Clone)]
pub struct Callback {
    func: Rc<CallbackFn>,
    name: Option<String>,
}

impl Callback {
    /// Wrap a function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Args) -> anyhow::Result<()> + 'static,
    {
        Self {
            func: Rc::new(func),
            name: None,
        }
    }

    /// Wrap a function and give it a display name.
    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Args) -> anyhow::Result<()> + 'static,
    {
        Self {
            func: Rc::new(func),
            name: Some(name.into()),
        }
    }

    /// Get the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the function with the given arguments.
    pub fn call(&self, args: &Args) -> anyhow::Result<()> {
        (self.func)(args)
    }

    /// Check if two callbacks share the same function.
    #[must_use]
    pub fn same_fn(&self, other: &Callback) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.func), Rc::as_ptr(&other.func))
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.func) as *const ()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.same_fn(other)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("name", &self.name)
            .field("addr", &self.addr())
            .finish()
    }
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "<fn {} at {:p}>", name, self.addr()),
            None => write!(f, "<fn at {:p}>", self.addr()),
        }
    }
}
