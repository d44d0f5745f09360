//! Type-erased access for trait objects.
//!
//! Conditions and handlers compare against `&dyn Trait` values. Equality
//! first checks the concrete type, which needs a way back from the trait
//! object to [`Any`].

use std::any::Any;

/// Upcast to `&dyn Any`. Implemented for every `'static` type.
pub trait AsAny {
    /// Get `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
