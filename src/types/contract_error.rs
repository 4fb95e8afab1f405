//! Contract violations reported by the container API itself.
//!
//! These are distinct from the domain failure carried by an
//! [`Outcome`](crate::Outcome): a [`ContractError`] always means the call site
//! is wrong (a blank reason, an absent value, asking a success for its
//! failure), never that the modelled operation failed.

use core::fmt;

/// What exactly was wrong with a rejected argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The argument was `None` where a value is required.
    Absent,
    /// The argument was empty or whitespace-only text.
    Blank,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Absent => f.write_str("must be present"),
            Violation::Blank => f.write_str("must not be blank"),
        }
    }
}

/// Error raised when an operation is invoked outside of its contract.
///
/// # Examples
///
/// ```
/// use op_rail::{ContractError, Outcome, Violation};
///
/// let err = Outcome::<i32>::fail_reason("   ").unwrap_err();
/// assert_eq!(
///     err,
///     ContractError::InvalidArgument { argument: "reason", violation: Violation::Blank }
/// );
///
/// let ok = Outcome::ok(1);
/// assert_eq!(ok.failure().unwrap_err(), ContractError::NotFound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractError {
    /// A required argument was absent or blank.
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// The rule it broke.
        violation: Violation,
    },
    /// A failure-only accessor was used on a success.
    NotFound,
}

impl ContractError {
    #[inline]
    pub(crate) const fn absent(argument: &'static str) -> Self {
        Self::InvalidArgument { argument, violation: Violation::Absent }
    }

    #[inline]
    pub(crate) const fn blank(argument: &'static str) -> Self {
        Self::InvalidArgument { argument, violation: Violation::Blank }
    }

    /// Returns `true` for [`ContractError::InvalidArgument`].
    #[must_use]
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` for [`ContractError::NotFound`].
    #[must_use]
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractError::InvalidArgument { argument, violation } => {
                write!(f, "invalid argument `{}`: {}", argument, violation)
            },
            ContractError::NotFound => f.write_str("requested outcome represents a success"),
        }
    }
}

impl core::error::Error for ContractError {}
