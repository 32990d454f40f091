//! Avatar validation and preview error types.

use thiserror::Error;

use crate::domain::entities::MAX_AVATAR_BYTES;

/// Errors raised while selecting an avatar file.
#[derive(Debug, Error)]
pub enum AvatarError {
    /// Declared media type is not in the allow-list.
    #[error("unsupported media type: {media_type:?}")]
    UnsupportedMediaType {
        /// The rejected declared type.
        media_type: String,
    },

    /// File exceeds the size cap.
    #[error("file too large: {size} bytes exceeds the {max} byte limit")]
    FileTooLarge {
        /// Declared size of the rejected file.
        size: u64,
        /// The enforced limit.
        max: u64,
    },

    /// The preview store failed to create a temporary resource.
    #[error("preview store error: {message}")]
    Preview {
        /// Adapter-supplied detail.
        message: String,
    },
}

impl AvatarError {
    /// Creates an unsupported-type error.
    #[must_use]
    pub fn unsupported(media_type: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            media_type: media_type.into(),
        }
    }

    /// Creates a too-large error against the fixed limit.
    #[must_use]
    pub const fn too_large(size: u64) -> Self {
        Self::FileTooLarge {
            size,
            max: MAX_AVATAR_BYTES,
        }
    }

    /// Creates a preview store error.
    #[must_use]
    pub fn preview(message: impl Into<String>) -> Self {
        Self::Preview {
            message: message.into(),
        }
    }

    /// Returns whether this is a policy rejection (as opposed to a
    /// store failure).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedMediaType { .. } | Self::FileTooLarge { .. }
        )
    }

    /// Message shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedMediaType { .. } => {
                "Please select a valid image file (JPEG, PNG, GIF, or WebP)".to_owned()
            }
            Self::FileTooLarge { .. } => "Image size must be less than 5MB".to_owned(),
            Self::Preview { message } => format!("Could not preview the selected image: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_match_reference_copy() {
        assert_eq!(
            AvatarError::unsupported("text/plain").user_message(),
            "Please select a valid image file (JPEG, PNG, GIF, or WebP)"
        );
        assert_eq!(
            AvatarError::too_large(6_000_000).user_message(),
            "Image size must be less than 5MB"
        );
    }

    #[test]
    fn validation_predicate() {
        assert!(AvatarError::unsupported("x").is_validation());
        assert!(AvatarError::too_large(1).is_validation());
        assert!(!AvatarError::preview("disk full").is_validation());
    }
}
