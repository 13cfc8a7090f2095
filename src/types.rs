//! Shared types and enums used across IMGPREP.
//! Includes `IndexOrigin` for class-id indexing and `BatchErrorPolicy` for
//! batch failure handling.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Indexing convention of a label table relative to model class ids.
///
/// Exported models disagree on whether class id `0` or class id `1` maps to
/// the first label line, so callers must state the convention explicitly;
/// there is no default.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum IndexOrigin {
    /// Class id `n` maps to label line `n`.
    ZeroBased,
    /// Class id `n` maps to label line `n - 1`; class id `0` has no label.
    OneBased,
}

impl std::fmt::Display for IndexOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexOrigin::ZeroBased => write!(f, "ZeroBased"),
            IndexOrigin::OneBased => write!(f, "OneBased"),
        }
    }
}

/// What a batch run does when a single item fails.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum BatchErrorPolicy {
    /// Abort on the first failing item; no later item is touched.
    FailFast,
    /// Record the failure and move on; successes keep their input positions.
    Continue,
}

impl std::fmt::Display for BatchErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchErrorPolicy::FailFast => write!(f, "FailFast"),
            BatchErrorPolicy::Continue => write!(f, "Continue"),
        }
    }
}
