//! Extension traits for lifting std containers into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use op_rail::traits::{OptionExt, ResultExt};
//!
//! let port = std::env::var("OP_RAIL_UNSET_PORT").into_outcome();
//! assert!(port.is_failure());
//!
//! let first = [3, 4].first().copied().ok_or_reason("empty list").unwrap();
//! assert_eq!(first.unwrap(), 3);
//! ```

use crate::types::alloc_type::Cow;
use crate::types::{ContractError, OpFailed};
use crate::Outcome;
use core::error::Error;

/// Extension trait for turning a `Result` into an [`Outcome`].
pub trait ResultExt<T> {
    /// Wraps the error as a deferred failure cause.
    fn into_outcome(self) -> Outcome<T>;

    /// Wraps the error as the cause of a failure with the given message.
    ///
    /// The message is only built on the error path. Returns
    /// [`ContractError::InvalidArgument`] if it turns out blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::traits::ResultExt;
    ///
    /// let parsed: Result<u16, _> = "http".parse::<u16>();
    /// let outcome = parsed.into_outcome_with(|| "reading port").unwrap();
    /// let failure = outcome.failure().unwrap();
    /// assert_eq!(failure.message(), "reading port");
    /// assert_eq!(failure.cause().unwrap().to_string(), "invalid digit found in string");
    /// ```
    fn into_outcome_with<M, F>(self, message: F) -> Result<Outcome<T>, ContractError>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        self.into()
    }

    #[inline]
    fn into_outcome_with<M, F>(self, message: F) -> Result<Outcome<T>, ContractError>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(Outcome::ok(value)),
            Err(error) => OpFailed::lightweight_with_cause(message(), error).map(Outcome::from_failure),
        }
    }
}

/// Extension trait for turning an `Option` into an [`Outcome`].
pub trait OptionExt<T> {
    /// Fails with `reason` on `None`.
    ///
    /// Returns [`ContractError::InvalidArgument`] if `reason` is blank.
    fn ok_or_reason<M>(self, reason: M) -> Result<Outcome<T>, ContractError>
    where
        M: Into<Cow<'static, str>>;

    /// Fails with `cause` on `None`.
    fn ok_or_fail<E>(self, cause: E) -> Outcome<T>
    where
        E: Error + Send + Sync + 'static;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn ok_or_reason<M>(self, reason: M) -> Result<Outcome<T>, ContractError>
    where
        M: Into<Cow<'static, str>>,
    {
        crate::convert::option_to_outcome(self, reason)
    }

    #[inline]
    fn ok_or_fail<E>(self, cause: E) -> Outcome<T>
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            Some(value) => Outcome::ok(value),
            None => Outcome::fail(cause),
        }
    }
}
