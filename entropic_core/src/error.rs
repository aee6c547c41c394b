//! Error taxonomy shared by every public operation.
//!
//! Three kinds only: bad caller input, no secure source anywhere, and a
//! source that exists but failed mid-draw. None of them is ever retried
//! against a weaker generator, downgraded, or swallowed internally; the
//! rejection-sampling redraw in `sampler` is ordinary control flow and does
//! not appear here.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EntropyError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("no cryptographically secure entropy source is available")]
    EntropyUnavailable,

    #[error("entropy source failed during draw: {0}")]
    EntropyFailed(String),
}

impl EntropyError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
