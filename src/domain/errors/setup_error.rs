//! Interview setup error types.

use thiserror::Error;

/// Errors raised while starting an interview.
#[derive(Debug, Error)]
pub enum SetupError {
    /// One or more selections are missing.
    #[error("interview setup incomplete: missing {missing}")]
    IncompleteSelection {
        /// Comma-separated list of the missing selections.
        missing: String,
    },

    /// The host refused the fullscreen request.
    #[error("fullscreen request denied: {reason}")]
    FullscreenDenied {
        /// Host-supplied detail.
        reason: String,
    },
}

impl SetupError {
    /// Creates an incomplete-selection error.
    #[must_use]
    pub fn incomplete(missing: impl Into<String>) -> Self {
        Self::IncompleteSelection {
            missing: missing.into(),
        }
    }

    /// Creates a fullscreen-denied error.
    #[must_use]
    pub fn fullscreen_denied(reason: impl Into<String>) -> Self {
        Self::FullscreenDenied {
            reason: reason.into(),
        }
    }

    /// Message shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::IncompleteSelection { missing } => {
                format!("Select {missing} before starting the interview")
            }
            Self::FullscreenDenied { .. } => {
                "Please allow fullscreen mode to start the interview".to_owned()
            }
        }
    }
}
