//! Failure signal and contract error types.
//!
//! # Examples
//!
//! ```
//! use op_rail::{ContractError, OpFailed};
//!
//! let err = OpFailed::lightweight("database connection failed").unwrap();
//! assert_eq!(err.to_string(), "database connection failed");
//!
//! assert!(matches!(OpFailed::new(""), Err(ContractError::InvalidArgument { .. })));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod contract_error;
pub mod op_failed;

pub use contract_error::*;
pub use op_failed::*;

/// SmallVec-backed collection used for rendered cause chains.
///
/// Uses inline storage for up to 2 elements, which covers the usual
/// "wrapper plus root cause" shape without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;
