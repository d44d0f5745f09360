//! Core types: errors, argument values, callables, configuration.
//!
//! These are the building blocks shared by conditions, handlers and the
//! event manager.

pub mod error;
pub mod value;
pub mod callback;
pub mod config;
pub mod downcast;
pub(crate) mod render;

pub use error::{Error, Result};
pub use value::{Args, Keywords, Positional, Value};
pub use callback::Callback;
pub use config::{PeriodicConfig, StepPolicy};
pub use downcast::AsAny;
