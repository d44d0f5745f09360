//! Handler comparison with optional difference reporting.

use super::Handler;

/// Check whether two handlers are equal.
///
/// The same instance is always equal to itself. Otherwise the comparison
/// is delegated to [`Handler::equal`]. When `show_difference` is set and
/// the handlers differ, both renderings are logged at `info` level.
pub fn handlers_equal(a: &dyn Handler, b: &dyn Handler, show_difference: bool) -> bool {
    if std::ptr::addr_eq(a, b) {
        return true;
    }
    let equal = a.equal(b);
    if show_difference && !equal {
        tracing::info!("handlers are different\nobject1=\n{a}\nobject2=\n{b}");
    }
    equal
}
