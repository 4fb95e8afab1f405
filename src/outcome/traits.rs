use crate::outcome::core::{Outcome, State};
use crate::types::OpFailed;
use core::error::Error;
use core::fmt;

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => f.debug_tuple("Success").field(value).finish(),
            State::Failure(failure) => f.debug_tuple("Failure").field(failure).finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Success(value) => write!(f, "Outcome[ok={}]", value),
            State::Failure(failure) => write!(f, "Outcome[fail={}]", failure),
        }
    }
}

/// Wraps the error of a `Result` as a deferred failure cause.
impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::ok(value),
            Err(error) => Outcome::fail(error),
        }
    }
}

/// Same as [`Outcome::into_result`]: the failure is materialized.
impl<T> From<Outcome<T>> for Result<T, OpFailed> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_option()
    }
}

/// Collects success values, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use op_rail::Outcome;
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::ok(1), Outcome::ok(2)].into_iter().collect();
/// assert_eq!(all.unwrap(), vec![1, 2]);
///
/// let mixed: Outcome<Vec<i32>> = vec![
///     Outcome::ok(1),
///     Outcome::fail_reason("second").unwrap(),
///     Outcome::fail_reason("third").unwrap(),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(mixed.failure().unwrap().message(), "second");
/// ```
impl<A, V> FromIterator<Outcome<A>> for Outcome<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A>>>(iter: I) -> Self {
        let mut failure = None;
        let values: V = iter
            .into_iter()
            .map_while(|outcome| match outcome.state {
                State::Success(value) => Some(value),
                State::Failure(err) => {
                    failure = Some(err);
                    None
                },
            })
            .collect();

        match failure {
            Some(err) => Outcome::from_failure(err),
            None => Outcome::ok(values),
        }
    }
}
