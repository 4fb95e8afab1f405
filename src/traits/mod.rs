//! Extension traits that bridge std types and [`Outcome`](crate::Outcome).
//!
//! - [`ResultExt`]: `Result<T, E>` → `Outcome<T>`
//! - [`OptionExt`]: `Option<T>` → `Outcome<T>`
//!
//! # Examples
//!
//! ```
//! use op_rail::traits::ResultExt;
//!
//! let parsed: Result<i32, std::num::ParseIntError> = "7".parse();
//! assert_eq!(parsed.into_outcome().unwrap(), 7);
//! ```

pub mod outcome_ext;

pub use outcome_ext::{OptionExt, ResultExt};
