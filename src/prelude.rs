//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use op_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`outcome!`], [`fail!`], [`op_failed!`]
//! - **Types**: [`Outcome`], [`OpFailed`], [`CaptureMode`], [`ContractError`]
//! - **Traits**: [`ResultExt`], [`OptionExt`]
//!
//! # Examples
//!
//! ```
//! use op_rail::prelude::*;
//!
//! fn read_limit(raw: &str) -> Outcome<u32> {
//!     raw.trim().parse::<u32>().into_outcome()
//! }
//!
//! assert_eq!(read_limit(" 10 ").unwrap(), 10);
//! assert!(read_limit("ten").is_failure());
//! ```

// Macros
pub use crate::{fail, op_failed, outcome};

// Core types
pub use crate::types::{CaptureMode, ContractError, OpFailed};
pub use crate::Outcome;

// Traits
pub use crate::traits::{OptionExt, ResultExt};

/// Result alias for code that propagates materialized failures with `?`.
///
/// # Examples
///
/// ```
/// use op_rail::prelude::*;
///
/// fn double(raw: &str) -> OpResult<i64> {
///     let n = raw.parse::<i64>().into_outcome().into_result()?;
///     Ok(n * 2)
/// }
///
/// assert_eq!(double("21").unwrap(), 42);
/// assert!(double("x").unwrap_err().is_captured());
/// ```
pub type OpResult<T> = Result<T, OpFailed>;
