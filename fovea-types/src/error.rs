use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the fovea workspace.
///
/// Every fallible operation reports one of three failure classes: malformed
/// or inconsistent caller input, a requested stream or event kind that is not
/// present on the recording, or a post-resample consistency violation that
/// indicates an internal bug rather than bad input.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FoveaError {
    /// Malformed arguments: missing or non-monotonic time column, unsupported
    /// enum value, downsampling precondition violated, fewer than two
    /// streams/events requested, and similar caller mistakes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A named stream or event kind was requested but is not present/loaded.
    #[error("stream unavailable: {name}")]
    StreamUnavailable {
        /// Name of the missing stream or event kind (e.g. "gaze", "blink").
        name: String,
    },

    /// A post-resample consistency check failed (row-count or timestamp
    /// mismatch across streams). This signals an internal bug, not bad input.
    #[error("alignment failure: {0}")]
    Alignment(String),
}

impl FoveaError {
    /// Helper: build an `InvalidInput` error from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Helper: build a `StreamUnavailable` error for a stream/event name.
    pub fn stream_unavailable(name: impl Into<String>) -> Self {
        Self::StreamUnavailable { name: name.into() }
    }

    /// Helper: build an `Alignment` error from any message.
    pub fn alignment(msg: impl Into<String>) -> Self {
        Self::Alignment(msg.into())
    }

    /// Returns true if this error indicates an internal bug rather than a
    /// caller mistake or missing data.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Alignment(_))
    }
}
