//! Profile save error types.

use thiserror::Error;

/// Errors reported by the save collaborator.
///
/// Opaque to the avatar editor: it propagates these unmodified and
/// never retries. Recovery is the caller's business.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Transport-level failure reaching the backend.
    #[error("network error while saving profile: {message}")]
    Network {
        /// Adapter-supplied detail.
        message: String,
    },

    /// Backend refused the update.
    #[error("profile update rejected: {message}")]
    Rejected {
        /// Adapter-supplied detail.
        message: String,
    },

    /// Anything else.
    #[error("unexpected error while saving profile: {message}")]
    Unexpected {
        /// Adapter-supplied detail.
        message: String,
    },
}

impl SaveError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether a retry could plausibly succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
