use crate::types::alloc_type::{Box, String};
use core::error::Error;
use core::fmt;

/// A cause known only by its rendered text.
///
/// Used to rebuild the cause chain of a failure that crossed a process or
/// serialization boundary, where the original error types are gone.
///
/// # Examples
///
/// ```
/// use op_rail::{OpFailed, RemoteCause};
///
/// let cause = RemoteCause::new("connection reset").caused_by(RemoteCause::new("EOF"));
/// let failed = OpFailed::from_cause(cause);
/// assert_eq!(failed.cause_chain().as_slice(), ["connection reset", "EOF"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteCause {
    message: String,
    source: Option<Box<RemoteCause>>,
}

impl RemoteCause {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self { message: message.into(), source: None }
    }

    /// Appends `source` at the end of this cause's chain.
    #[must_use]
    pub fn caused_by(mut self, source: RemoteCause) -> Self {
        let tail = match self.source.take() {
            Some(inner) => (*inner).caused_by(source),
            None => source,
        };
        self.source = Some(Box::new(tail));
        self
    }

    /// Rebuilds a chain from rendered links, outermost first.
    pub fn from_links<I>(links: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: DoubleEndedIterator,
    {
        links.into_iter().rev().fold(None, |source, message| {
            Some(RemoteCause { message, source: source.map(Box::new) })
        })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RemoteCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for RemoteCause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn Error + 'static))
    }
}
