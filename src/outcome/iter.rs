use crate::outcome::core::{Outcome, State};
use core::iter::FusedIterator;

/// Borrowing iterator over the success value, created by [`Outcome::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the success value.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_option() }
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Outcome<T> {
    /// Lazily yields the success value once, or nothing on failure.
    ///
    /// Each call starts a fresh iteration.
    ///
    /// # Examples
    ///
    /// ```
    /// use op_rail::Outcome;
    ///
    /// let v = Outcome::ok(5);
    /// assert_eq!(v.iter().count(), 1);
    /// assert_eq!(v.iter().copied().sum::<i32>(), 5);
    ///
    /// let failed = Outcome::<i32>::fail_reason("e").unwrap();
    /// assert_eq!(failed.iter().next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        match &self.state {
            State::Success(value) => Iter { inner: Some(value) },
            State::Failure(_) => Iter { inner: None },
        }
    }
}
