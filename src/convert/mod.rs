//! Conversion helpers between `Result`, `Option` and [`Outcome`].
//!
//! These adapters make it straightforward to adopt `op-rail` at the edges of a
//! codebase: wrap fallible std APIs into outcomes, and hand outcomes back to
//! `?`-based code as `Result<T, OpFailed>`.
//!
//! # Examples
//!
//! ```
//! use op_rail::convert::*;
//!
//! let parsed: Result<i32, std::num::ParseIntError> = "42".parse();
//! let outcome = result_to_outcome(parsed);
//! assert!(outcome.is_success());
//!
//! let back = outcome_to_result(outcome);
//! assert_eq!(back.unwrap(), 42);
//! ```

use crate::types::alloc_type::Cow;
use crate::types::{ContractError, OpFailed};
use crate::Outcome;
use core::error::Error;

/// Converts a `Result` into an `Outcome`, wrapping the error as a deferred cause.
///
/// # Examples
///
/// ```
/// use op_rail::convert::result_to_outcome;
///
/// let err: Result<u8, std::num::ParseIntError> = "x".parse();
/// let outcome = result_to_outcome(err);
/// assert_eq!(outcome.failure().unwrap().message(), "invalid digit found in string");
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Error + Send + Sync + 'static,
{
    result.into()
}

/// Converts a `Result` that already carries an [`OpFailed`] without re-wrapping it.
///
/// The signal keeps its message and cause and is stored in deferred mode.
///
/// # Examples
///
/// ```
/// use op_rail::{convert::failed_result_to_outcome, OpFailed};
///
/// let result: Result<i32, OpFailed> = Err(OpFailed::new("quota exceeded").unwrap());
/// let outcome = failed_result_to_outcome(result);
/// let failure = outcome.failure().unwrap();
/// assert_eq!(failure.message(), "quota exceeded");
/// assert!(failure.cause().is_none());
/// ```
#[inline]
pub fn failed_result_to_outcome<T>(result: Result<T, OpFailed>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::ok(value),
        Err(failure) => Outcome::from_failure(failure.deferred()),
    }
}

/// Converts an `Outcome` into a `Result`, materializing the failure.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, OpFailed> {
    outcome.into_result()
}

/// Converts an `Option` into an `Outcome`, failing with `reason` on `None`.
///
/// Returns [`ContractError::InvalidArgument`] if `reason` is blank, even when
/// `option` is `Some`.
///
/// # Examples
///
/// ```
/// use op_rail::convert::option_to_outcome;
///
/// let found = option_to_outcome(Some(3), "user not found").unwrap();
/// assert_eq!(found.unwrap(), 3);
///
/// let missing = option_to_outcome(None::<i32>, "user not found").unwrap();
/// assert_eq!(missing.failure().unwrap().message(), "user not found");
/// ```
#[inline]
pub fn option_to_outcome<T, M>(option: Option<T>, reason: M) -> Result<Outcome<T>, ContractError>
where
    M: Into<Cow<'static, str>>,
{
    let failed = Outcome::fail_reason(reason)?;
    Ok(match option {
        Some(value) => Outcome::ok(value),
        None => failed,
    })
}

/// Removes one level of nesting.
///
/// # Examples
///
/// ```
/// use op_rail::{convert::flatten_outcome, Outcome};
///
/// let nested = Outcome::ok(Outcome::ok(1));
/// assert_eq!(flatten_outcome(nested).unwrap(), 1);
/// ```
#[inline]
pub fn flatten_outcome<T>(outcome: Outcome<Outcome<T>>) -> Outcome<T> {
    outcome.and_then(|inner| inner)
}

/// Runs `f`, turning a panic raised by an [`Outcome`] back into a failure.
///
/// Panics whose payload is an [`OpFailed`] (as produced by
/// [`Outcome::unwrap`] and [`Outcome::raise_if_failure`]) become failures again,
/// keeping their captured backtrace. Any other panic keeps unwinding.
///
/// # Examples
///
/// ```
/// use op_rail::{convert::catch_raised, Outcome};
///
/// let outcome = catch_raised(|| {
///     let step = Outcome::<i32>::fail_reason("step failed").unwrap();
///     step.unwrap() + 1
/// });
/// assert_eq!(outcome.failure().unwrap().message(), "step failed");
/// ```
#[cfg(feature = "std")]
pub fn catch_raised<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(value) => Outcome::ok(value),
        Err(payload) => match payload.downcast::<OpFailed>() {
            Ok(failure) => Outcome::from_failure(*failure),
            Err(other) => std::panic::resume_unwind(other),
        },
    }
}
