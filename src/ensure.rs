//! Argument preconditions checked at the entry of fallible constructors.
//!
//! # Examples
//!
//! ```
//! use op_rail::ensure;
//!
//! assert_eq!(ensure::not_null(Some(3), "value"), Ok(3));
//! assert!(ensure::not_null::<i32>(None, "value").is_err());
//! assert!(ensure::not_blank(" \t", "message").is_err());
//! ```

use crate::types::ContractError;

/// Unwraps `value`, rejecting `None` with [`ContractError::InvalidArgument`].
#[inline]
pub fn not_null<T>(value: Option<T>, name: &'static str) -> Result<T, ContractError> {
    value.ok_or(ContractError::absent(name))
}

/// Passes `text` through, rejecting empty or whitespace-only input.
#[inline]
pub fn not_blank<'a>(text: &'a str, name: &'static str) -> Result<&'a str, ContractError> {
    if text.trim().is_empty() {
        return Err(ContractError::blank(name));
    }
    Ok(text)
}
