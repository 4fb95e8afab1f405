pub mod outcome;

#[cfg(feature = "tracing")]
pub mod logging;
