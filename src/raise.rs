//! The one place where a failure leaves the value world and becomes a panic.

use core::fmt::Display;

/// Panics with `error` as the payload.
///
/// With `std` the payload is `error` itself, so callers of
/// [`std::panic::catch_unwind`] can downcast it back. Without `std` the
/// panic carries the rendered message.
#[cold]
#[track_caller]
pub(crate) fn raise<E>(error: E) -> !
where
    E: Display + Send + 'static,
{
    #[cfg(feature = "tracing")]
    tracing::error!(failure = %error, "raising failed outcome");

    unwind(error)
}

#[cfg(feature = "std")]
#[track_caller]
fn unwind<E>(error: E) -> !
where
    E: Display + Send + 'static,
{
    std::panic::panic_any(error)
}

#[cfg(not(feature = "std"))]
#[track_caller]
fn unwind<E>(error: E) -> !
where
    E: Display + Send + 'static,
{
    panic!("{}", error)
}
