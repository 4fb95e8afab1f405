//! Failure signal with an optionally deferred backtrace.
//!
//! [`OpFailed`] is the failure half of an [`Outcome`](crate::Outcome). It carries a
//! message, an optional underlying cause and a [`CaptureMode`]:
//!
//! - **Capturing** signals take a [`Backtrace`](std::backtrace::Backtrace) the moment
//!   they are built. Use them when the failure is about to propagate anyway.
//! - **Deferred** (lightweight) signals skip the capture. The backtrace is only taken
//!   if the signal is later [materialized](OpFailed::materialize), which happens when
//!   an outcome is unwrapped or raised. Signals that are inspected, remapped or
//!   dropped never pay for stack walking.
//!
//! # Examples
//!
//! ```
//! use op_rail::{CaptureMode, OpFailed};
//!
//! let lazy = OpFailed::lightweight("disk quota exceeded").unwrap();
//! assert_eq!(lazy.mode(), CaptureMode::Deferred);
//!
//! let raised = lazy.clone().materialize();
//! assert!(raised.is_captured());
//! assert_eq!(raised.message(), lazy.message());
//! ```
use core::error::Error;

use crate::ensure;
use crate::types::alloc_type::{Arc, Cow, String, ToString};
use crate::types::{ContractError, ErrorVec};

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

mod remote;
#[cfg(feature = "serde")]
mod serde_impl;
mod traits;

pub use remote::RemoteCause;

/// Shared, type-erased cause of a failure.
pub type SharedCause = Arc<dyn Error + Send + Sync + 'static>;

/// Whether diagnostic context was captured when the signal was built.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureMode {
    /// The backtrace was taken at construction (or on materialization).
    Capturing,
    /// No backtrace yet; taken only if the signal is raised.
    Deferred,
}

/// A failure reason: message, optional cause and capture mode.
///
/// Equality and hashing are structural. Two signals are equal when their
/// messages match, their cause chains render identically link by link and
/// they share the same [`CaptureMode`]. The backtrace itself never
/// participates in comparisons.
#[derive(Debug, Clone)]
pub struct OpFailed {
    message: Cow<'static, str>,
    cause: Option<SharedCause>,
    mode: CaptureMode,
    #[cfg(feature = "std")]
    backtrace: Option<Arc<Backtrace>>,
}

impl OpFailed {
    /// Creates a capturing signal from a message.
    ///
    /// Returns [`ContractError::InvalidArgument`] if `message` is blank.
    #[inline]
    pub fn new<M>(message: M) -> Result<Self, ContractError>
    where
        M: Into<Cow<'static, str>>,
    {
        let message = checked_message(message.into())?;
        Ok(Self::assemble(message, None, CaptureMode::Capturing))
    }

    /// Creates a capturing signal that wraps `cause`; the message is the cause's `Display`.
    #[inline]
    pub fn from_cause<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(cause), CaptureMode::Capturing)
    }

    /// Creates a capturing signal with both a message and a cause.
    #[inline]
    pub fn with_cause<M, E>(message: M, cause: E) -> Result<Self, ContractError>
    where
        M: Into<Cow<'static, str>>,
        E: Error + Send + Sync + 'static,
    {
        let message = checked_message(message.into())?;
        Ok(Self::assemble(message, Some(Arc::new(cause)), CaptureMode::Capturing))
    }

    /// Creates a deferred signal from a message.
    #[inline]
    pub fn lightweight<M>(message: M) -> Result<Self, ContractError>
    where
        M: Into<Cow<'static, str>>,
    {
        let message = checked_message(message.into())?;
        Ok(Self::assemble(message, None, CaptureMode::Deferred))
    }

    /// Creates a deferred signal that wraps `cause`.
    #[inline]
    pub fn lightweight_from_cause<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(cause), CaptureMode::Deferred)
    }

    /// Creates a deferred signal with both a message and a cause.
    #[inline]
    pub fn lightweight_with_cause<M, E>(message: M, cause: E) -> Result<Self, ContractError>
    where
        M: Into<Cow<'static, str>>,
        E: Error + Send + Sync + 'static,
    {
        let message = checked_message(message.into())?;
        Ok(Self::assemble(message, Some(Arc::new(cause)), CaptureMode::Deferred))
    }

    /// Wraps an already shared cause without another allocation.
    #[inline]
    pub fn from_shared(cause: SharedCause, mode: CaptureMode) -> Self {
        let message = Cow::Owned(cause.to_string());
        Self::assemble(message, Some(cause), mode)
    }

    fn assemble(message: Cow<'static, str>, cause: Option<SharedCause>, mode: CaptureMode) -> Self {
        Self {
            message,
            cause,
            mode,
            #[cfg(feature = "std")]
            backtrace: match mode {
                CaptureMode::Capturing => Some(Arc::new(Backtrace::capture())),
                CaptureMode::Deferred => None,
            },
        }
    }

    /// Returns the failure message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying cause, if any.
    #[must_use]
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns the shared handle to the cause, if any.
    #[must_use]
    #[inline]
    pub fn shared_cause(&self) -> Option<&SharedCause> {
        self.cause.as_ref()
    }

    /// Returns whether the backtrace is captured or deferred.
    #[must_use]
    #[inline]
    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Returns `true` once diagnostic context has been captured.
    #[must_use]
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.mode == CaptureMode::Capturing
    }

    /// Returns the captured backtrace.
    ///
    /// `None` for deferred signals and for signals restored by deserialization.
    /// A captured backtrace may still report
    /// [`BacktraceStatus::Disabled`](std::backtrace::BacktraceStatus::Disabled) when
    /// `RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` are unset.
    #[cfg(feature = "std")]
    #[must_use]
    #[inline]
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_deref()
    }

    /// Iterates the cause chain, starting with the direct cause.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static)) }
    }

    /// Returns the deepest error in the cause chain.
    #[must_use]
    pub fn root_cause(&self) -> Option<&(dyn Error + 'static)> {
        self.chain().last()
    }

    /// Renders every link of the cause chain, direct cause first.
    #[must_use]
    pub fn cause_chain(&self) -> ErrorVec<String> {
        self.chain().map(|link| link.to_string()).collect()
    }

    /// Captures diagnostic context now if it was deferred.
    ///
    /// Capturing signals are returned unchanged, keeping their original backtrace.
    #[must_use]
    pub fn materialize(mut self) -> Self {
        if self.mode == CaptureMode::Capturing {
            return self;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(failure = %self.message, "capturing backtrace for deferred failure");

        self.mode = CaptureMode::Capturing;
        #[cfg(feature = "std")]
        {
            self.backtrace = Some(Arc::new(Backtrace::capture()));
        }
        self
    }

    /// Drops any captured context and switches to deferred mode.
    #[must_use]
    pub fn deferred(mut self) -> Self {
        self.mode = CaptureMode::Deferred;
        #[cfg(feature = "std")]
        {
            self.backtrace = None;
        }
        self
    }

    /// Restores a signal from its parts; used by deserialization.
    #[cfg(feature = "serde")]
    pub(crate) fn restore(
        message: Cow<'static, str>,
        cause: Option<SharedCause>,
        mode: CaptureMode,
    ) -> Self {
        Self {
            message,
            cause,
            mode,
            #[cfg(feature = "std")]
            backtrace: None,
        }
    }
}

fn checked_message(message: Cow<'static, str>) -> Result<Cow<'static, str>, ContractError> {
    ensure::not_blank(&message, "message")?;
    Ok(message)
}

/// Iterator over a failure's cause chain, created by [`OpFailed::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}
