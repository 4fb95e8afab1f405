//! Success-or-failure outcomes with lazily captured backtraces.
//!
//! An [`Outcome`] holds either a value or an [`OpFailed`] signal. Signals stored
//! in an outcome defer their backtrace until they are raised or returned.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `op_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Success and Failure
//!
//! ```
//! use op_rail::Outcome;
//!
//! let ok = Outcome::ok("a".to_string()).map(|s| s + "b");
//! assert_eq!(ok.unwrap(), "ab");
//!
//! let failed = Outcome::<String>::fail_reason("boom").unwrap();
//! assert_eq!(failed.map(|s| s.len() as i64).unwrap_or(-1), -1);
//! ```
//!
//! ## Deferred Backtraces
//!
//! Failures stored in an [`Outcome`] are lightweight: no backtrace is taken until
//! the failure actually propagates.
//!
//! ```
//! use op_rail::{CaptureMode, Outcome};
//!
//! let failed = Outcome::<u32>::fail_reason("connection refused").unwrap();
//! assert_eq!(failed.failure().unwrap().mode(), CaptureMode::Deferred);
//!
//! let err = failed.into_result().unwrap_err();
//! assert_eq!(err.mode(), CaptureMode::Capturing);
//! ```
//!
//! ## Bridging std Types
//!
//! ```
//! use op_rail::traits::ResultExt;
//!
//! let port = "8080".parse::<u16>().into_outcome();
//! assert_eq!(port.unwrap_or(80), 8080);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Result, Option and Outcome
pub mod convert;
/// Argument preconditions for fallible constructors
pub mod ensure;
/// Macros for building outcomes and failure signals
pub mod macros;
/// The Outcome container and its iterators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for std containers
pub mod traits;
/// OpFailed, ContractError and supporting types
pub mod types;

mod raise;

pub use convert::*;
pub use outcome::{Iter, IntoIter, Outcome};
pub use traits::*;
pub use types::{
    CaptureMode, Chain, ContractError, ErrorVec, OpFailed, RemoteCause, SharedCause, Violation,
};
