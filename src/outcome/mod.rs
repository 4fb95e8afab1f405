//! The success-or-failure container.
//!
//! This module provides [`Outcome`], which holds either a success value or an
//! [`OpFailed`](crate::OpFailed) signal, never both and never neither, together
//! with the operations to transform, recover, extract and convert it.
//!
//! # Key Components
//!
//! - [`Outcome`] - the container and its operation algebra
//! - [`Iter`] / [`IntoIter`] - 0-or-1 element iterators over the success value
//!
//! # Examples
//!
//! ```
//! use op_rail::Outcome;
//!
//! let v = Outcome::ok(1).map(|x| x + 1);
//! assert_eq!(v.iter().count(), 1);
//!
//! let f = Outcome::<i32>::fail_reason("offline").unwrap();
//! assert_eq!(f.into_option(), None);
//! ```
pub mod core;
pub mod iter;
mod traits;

pub use self::core::*;
pub use self::iter::*;
