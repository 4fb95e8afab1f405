use super::{CaptureMode, OpFailed, RemoteCause, SharedCause};
use crate::types::alloc_type::{Arc, Cow, String};
use crate::types::ErrorVec;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire form of a failure. Causes travel as rendered text, outermost first.
#[derive(Serialize)]
struct FailureRef<'a> {
    message: &'a str,
    causes: ErrorVec<String>,
    captured: bool,
}

#[derive(Deserialize)]
struct FailureRepr {
    message: String,
    #[serde(default)]
    causes: ErrorVec<String>,
    captured: bool,
}

impl Serialize for OpFailed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FailureRef {
            message: self.message(),
            causes: self.cause_chain(),
            captured: self.is_captured(),
        }
        .serialize(serializer)
    }
}

/// Deserialized failures keep their capture mode but never a backtrace.
impl<'de> Deserialize<'de> for OpFailed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = FailureRepr::deserialize(deserializer)?;
        if repr.message.trim().is_empty() && repr.causes.is_empty() {
            return Err(D::Error::custom("failure needs a non-blank message or a cause"));
        }

        let mode = if repr.captured { CaptureMode::Capturing } else { CaptureMode::Deferred };
        let cause = RemoteCause::from_links(repr.causes)
            .map(|cause| Arc::new(cause) as SharedCause);
        Ok(OpFailed::restore(Cow::Owned(repr.message), cause, mode))
    }
}
