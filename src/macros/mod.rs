//! Ergonomic macros for building outcomes and failure signals.
//!
//! - [`macro@crate::outcome`] - Wraps a `Result`-producing expression or block into an
//!   [`Outcome`](crate::Outcome), turning the error into a deferred cause.
//! - [`macro@crate::fail`] - Formats a reason and builds a failed outcome from it.
//! - [`macro@crate::op_failed`] - Formats a message and builds a capturing
//!   [`OpFailed`](crate::OpFailed), for failures that are about to propagate.
//!
//! # Examples
//!
//! ```
//! use op_rail::{fail, outcome, Outcome};
//!
//! let parsed = outcome!("12".parse::<u8>());
//! assert_eq!(parsed.unwrap(), 12);
//!
//! let user_id = 7;
//! let missing: Outcome<()> = fail!("user {} not found", user_id).unwrap();
//! assert_eq!(missing.failure().unwrap().message(), "user 7 not found");
//! ```

/// Wraps a `Result`-producing expression or block into an [`Outcome`](crate::Outcome).
///
/// # Syntax
///
/// - `outcome!(expr)` - Wraps a single `Result`-producing expression
/// - `outcome!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```rust
/// use op_rail::outcome;
///
/// let result = outcome!({
///     let raw = "0x1f";
///     u32::from_str_radix(raw.trim_start_matches("0x"), 16)
/// });
/// assert_eq!(result.unwrap(), 31);
///
/// let failed = outcome!("nope".parse::<u32>());
/// assert!(failed.is_failure());
/// ```
#[macro_export]
macro_rules! outcome {
    ($expr:expr $(,)?) => {
        $crate::Outcome::from($expr)
    };
}

/// Creates a failed [`Outcome`](crate::Outcome) from a formatted reason.
///
/// Expands to [`Outcome::fail_reason`](crate::Outcome::fail_reason), so it yields
/// `Result<Outcome<T>, ContractError>` and rejects a blank reason.
///
/// # Examples
///
/// ```
/// use op_rail::{fail, Outcome};
///
/// let attempts = 3;
/// let v: Outcome<u8> = fail!("gave up after {} attempts", attempts).unwrap();
/// assert!(v.is_failure());
///
/// assert!(fail!("{}", "  ").map(|v: Outcome<u8>| v).is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::fail_reason($crate::types::alloc_type::format!($($arg)*))
    };
}

/// Creates a capturing [`OpFailed`](crate::OpFailed) from a formatted message.
///
/// The backtrace is captured at the macro call site.
///
/// # Examples
///
/// ```
/// use op_rail::op_failed;
///
/// let shard = 4;
/// let err = op_failed!("shard {} unavailable", shard).unwrap();
/// assert!(err.is_captured());
/// assert_eq!(err.message(), "shard 4 unavailable");
/// ```
#[macro_export]
macro_rules! op_failed {
    ($($arg:tt)*) => {
        $crate::OpFailed::new($crate::types::alloc_type::format!($($arg)*))
    };
}
