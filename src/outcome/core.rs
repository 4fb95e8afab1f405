use crate::ensure;
use crate::raise::raise;
use crate::types::alloc_type::Cow;
use crate::types::{ContractError, OpFailed};
use core::error::Error;
use core::fmt::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of one operation: a success value XOR a failure signal.
///
/// `Outcome<T>` models expected failure as data. A failure is stored as a
/// *deferred* [`OpFailed`]: no backtrace is taken when it is created, mapped or
/// inspected. The backtrace is captured only when an extraction operation
/// elects to propagate the failure ([`unwrap`](Outcome::unwrap),
/// [`into_result`](Outcome::into_result), [`raise_if_failure`](Outcome::raise_if_failure), ...).
///
/// Every operation consumes the receiver and returns a new value, or hands the
/// receiver back untouched when the operation does not apply to its state.
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome<T>` serializes as `{"ok": value}` or
/// `{"fail": {"message": .., "causes": [..], "captured": ..}}`.
///
/// # Examples
///
/// ```
/// use op_rail::Outcome;
///
/// let greeting = Outcome::ok("a".to_string()).map(|s| s + "b");
/// assert_eq!(greeting.unwrap(), "ab");
///
/// let length = Outcome::<String>::fail_reason("boom").unwrap().map(|s| s.len() as i64);
/// assert_eq!(length.unwrap_or(-1), -1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T> {
    pub(crate) state: State<T>,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) enum State<T> {
    #[cfg_attr(feature = "serde", serde(rename = "ok"))]
    Success(T),
    #[cfg_attr(feature = "serde", serde(rename = "fail"))]
    Failure(OpFailed),
}

impl<T> Outcome<T> {
    /// Creates a success holding `value`.
    ///
    /// `value` is stored as given: an `Option` payload such as `None` is not
    /// inspected, so keeping absent values out is up to the caller. Use
    /// [`from_nullable`](Outcome::from_nullable) to reject them.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// let v = Outcome::ok(42);
    /// assert!(v.is_success());
    /// assert_eq!(v.unwrap(), 42);
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { state: State::Success(value) }
    }

    /// Creates a success from a possibly absent value.
    ///
    /// A success never wraps an absent value, so `None` is rejected with
    /// [`ContractError::InvalidArgument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// assert!(Outcome::from_nullable(Some(1)).unwrap().is_success());
    /// assert!(Outcome::<i32>::from_nullable(None).unwrap_err().is_invalid_argument());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Result<Self, ContractError> {
        ensure::not_null(value, "value").map(Self::ok)
    }

    /// Creates a failure caused by `cause`.
    ///
    /// The cause is wrapped into a deferred [`OpFailed`] whose message is the
    /// cause's `Display` output.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::{CaptureMode, Outcome};
    /// use std::io;
    ///
    /// let v = Outcome::<()>::fail(io::Error::new(io::ErrorKind::NotFound, "missing.toml"));
    /// let failure = v.failure().unwrap();
    /// assert_eq!(failure.message(), "missing.toml");
    /// assert_eq!(failure.mode(), CaptureMode::Deferred);
    /// ```
    #[inline]
    pub fn fail<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_failure(OpFailed::lightweight_from_cause(cause))
    }

    /// Creates a failure from a textual reason.
    ///
    /// Returns [`ContractError::InvalidArgument`] if `reason` is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// let v = Outcome::<i32>::fail_reason("x").unwrap();
    /// assert_eq!(v.failure().unwrap().message(), "x");
    ///
    /// assert!(Outcome::<i32>::fail_reason("").is_err());
    /// ```
    #[inline]
    pub fn fail_reason<M>(reason: M) -> Result<Self, ContractError>
    where
        M: Into<Cow<'static, str>>,
    {
        let reason = reason.into();
        ensure::not_blank(&reason, "reason")?;
        OpFailed::lightweight(reason).map(Self::from_failure)
    }

    /// Creates a failure holding `failure` as is, keeping its capture mode.
    #[inline]
    pub fn from_failure(failure: OpFailed) -> Self {
        Self { state: State::Failure(failure) }
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    /// Returns `true` if the outcome holds a failure signal.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// Maps the success value.
    ///
    /// On failure the signal is moved into the new outcome untouched and `f`
    /// is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// let v = Outcome::ok(21).map(|x| x * 2);
    /// assert_eq!(v.unwrap(), 42);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => Outcome::ok(f(value)),
            State::Failure(failure) => Outcome::from_failure(failure),
        }
    }

    /// Maps the failure signal.
    ///
    /// On failure, `f`'s output becomes the signal of a new failure, in
    /// deferred mode. A success is returned unchanged and `f` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::{OpFailed, Outcome};
    ///
    /// let v = Outcome::<i32>::fail_reason("timeout").unwrap().map_failure(|e| {
    ///     OpFailed::lightweight(format!("fetching profile: {}", e)).unwrap()
    /// });
    /// assert_eq!(v.failure().unwrap().message(), "fetching profile: timeout");
    /// ```
    #[inline]
    pub fn map_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(OpFailed) -> OpFailed,
    {
        match self.state {
            State::Success(_) => self,
            State::Failure(failure) => Self::from_failure(f(failure).deferred()),
        }
    }

    /// Chains a step that may itself fail. Short-circuits on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32> {
    ///     if input % 2 == 0 {
    ///         Outcome::ok(input)
    ///     } else {
    ///         Outcome::fail_reason("not even").unwrap()
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(4).and_then(parse_even).unwrap(), 4);
    /// assert!(Outcome::ok(3).and_then(parse_even).is_failure());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            State::Success(value) => f(value),
            State::Failure(failure) => Outcome::from_failure(failure),
        }
    }

    /// Turns a failure into a success computed from its signal.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// let v = Outcome::<usize>::fail_reason("cache miss").unwrap().recover(|e| e.message().len());
    /// assert_eq!(v.unwrap(), 10);
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(OpFailed) -> T,
    {
        match self.state {
            State::Success(_) => self,
            State::Failure(failure) => Self::ok(f(failure)),
        }
    }

    /// Calls `f` on failure to produce a replacement outcome.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(OpFailed) -> Outcome<T>,
    {
        match self.state {
            State::Success(_) => self,
            State::Failure(failure) => f(failure),
        }
    }

    /// Calls `f` with the success value, if any.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let State::Success(value) = &self.state {
            f(value);
        }
        self
    }

    /// Calls `f` with the failure signal, if any.
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&OpFailed),
    {
        if let State::Failure(failure) = &self.state {
            f(failure);
        }
        self
    }

    /// Returns the success value or `fallback`.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// assert_eq!(Outcome::ok(1).unwrap_or(7), 1);
    /// assert_eq!(Outcome::<i32>::fail_reason("e").unwrap().unwrap_or(7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => fallback,
        }
    }

    /// Returns the success value or the output of `factory`.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// assert_eq!(Outcome::ok(1).unwrap_or_else(|| 99), 1);
    /// assert_eq!(Outcome::<i32>::fail_reason("e").unwrap().unwrap_or_else(|| 99), 99);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(_) => factory(),
        }
    }

    /// Returns the success value, or panics with the failure.
    ///
    /// The backtrace of a deferred failure is captured at this point. With the
    /// `std` feature the panic payload is the materialized [`OpFailed`].
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use op_rail::Outcome;
    ///
    /// Outcome::<i32>::fail_reason("boom").unwrap().unwrap();
    /// ```
    #[track_caller]
    #[inline]
    pub fn unwrap(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(failure) => raise(failure.materialize()),
        }
    }

    /// Returns the success value, or panics with `remap` applied to the
    /// materialized failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[track_caller]
    #[inline]
    pub fn unwrap_with<E, F>(self, remap: F) -> T
    where
        F: FnOnce(OpFailed) -> E,
        E: Display + Send + 'static,
    {
        match self.state {
            State::Success(value) => value,
            State::Failure(failure) => raise(remap(failure.materialize())),
        }
    }

    /// Converts into a `Result`, materializing the failure for propagation with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::{OpFailed, Outcome};
    ///
    /// fn load() -> Result<u16, OpFailed> {
    ///     let port = Outcome::<u16>::fail_reason("port not configured").unwrap();
    ///     let port = port.into_result()?;
    ///     Ok(port)
    /// }
    ///
    /// let err = load().unwrap_err();
    /// assert!(err.is_captured());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, OpFailed> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(failure) => Err(failure.materialize()),
        }
    }

    /// Like [`into_result`](Outcome::into_result), passing the failure through `remap`.
    #[inline]
    pub fn into_result_with<E, F>(self, remap: F) -> Result<T, E>
    where
        F: FnOnce(OpFailed) -> E,
    {
        self.into_result().map_err(remap)
    }

    /// Returns the failure signal.
    ///
    /// Returns [`ContractError::NotFound`] on a success.
    #[inline]
    pub fn failure(&self) -> Result<&OpFailed, ContractError> {
        match &self.state {
            State::Success(_) => Err(ContractError::NotFound),
            State::Failure(failure) => Ok(failure),
        }
    }

    /// Returns the failure signal passed through `remap`.
    ///
    /// Returns [`ContractError::NotFound`] on a success without calling `remap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// let v = Outcome::<()>::fail_reason("denied").unwrap();
    /// assert_eq!(v.failure_with(|e| e.message().to_uppercase()).unwrap(), "DENIED");
    /// ```
    #[inline]
    pub fn failure_with<R, F>(&self, remap: F) -> Result<R, ContractError>
    where
        F: FnOnce(&OpFailed) -> R,
    {
        self.failure().map(remap)
    }

    /// Consumes the outcome, returning its failure signal.
    #[inline]
    pub fn into_failure(self) -> Result<OpFailed, ContractError> {
        match self.state {
            State::Success(_) => Err(ContractError::NotFound),
            State::Failure(failure) => Ok(failure),
        }
    }

    /// Panics with the materialized failure if this is a failure; otherwise does nothing.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[track_caller]
    #[inline]
    pub fn raise_if_failure(&self) {
        if let State::Failure(failure) = &self.state {
            raise(failure.clone().materialize());
        }
    }

    /// Returns the materialized failure as `Err`, or `Ok(())` on success.
    #[inline]
    pub fn check(&self) -> Result<(), OpFailed> {
        match &self.state {
            State::Success(_) => Ok(()),
            State::Failure(failure) => Err(failure.clone().materialize()),
        }
    }

    /// Converts into an `Option`, discarding the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// assert_eq!(Outcome::ok(3).into_option(), Some(3));
    /// assert_eq!(Outcome::<i32>::fail_reason("e").unwrap().into_option(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Converts from `&Outcome<T>` to `Outcome<&T>`.
    ///
    /// The failure signal is shared, not deep-copied: its cause and backtrace
    /// live behind `Arc`.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// let name = Outcome::ok("ferris".to_string());
    /// assert_eq!(name.as_ref().map(|s| s.len()).unwrap(), 6);
    /// assert!(name.is_success());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match &self.state {
            State::Success(value) => Outcome::ok(value),
            State::Failure(failure) => Outcome::from_failure(failure.clone()),
        }
    }
}
