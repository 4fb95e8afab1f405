use super::{Chain, OpFailed};
use crate::types::alloc_type::{Arc, String, ToString};
use core::error::Error;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

impl PartialEq for OpFailed {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.message == other.message && causes_match(self, other)
    }
}

impl Eq for OpFailed {}

fn causes_match(left: &OpFailed, right: &OpFailed) -> bool {
    match (&left.cause, &right.cause) {
        (None, None) => true,
        (Some(a), Some(b)) if Arc::ptr_eq(a, b) => true,
        (Some(_), Some(_)) => rendered(left.chain()).eq(rendered(right.chain())),
        _ => false,
    }
}

fn rendered<'a>(chain: Chain<'a>) -> impl Iterator<Item = String> + 'a {
    chain.map(|link| link.to_string())
}

impl Hash for OpFailed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mode.hash(state);
        self.message.hash(state);
        for link in rendered(self.chain()) {
            link.hash(state);
        }
    }
}

impl Display for OpFailed {
    /// `{}` prints the message; `{:#}` appends the cause chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if f.alternate() {
            let mut chain = self.chain().peekable();
            if chain.peek().is_some() {
                f.write_str("\nCaused by:")?;
                for link in chain {
                    write!(f, "\n  - {}", link)?;
                }
            }
        }
        Ok(())
    }
}

impl Error for OpFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}
