//! Avatar file and preview primitives.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::domain::errors::AvatarError;

/// Declared media types accepted for avatar uploads.
///
/// Enforced here regardless of any chooser-level filtering the host
/// applies; a caller may bypass the chooser's filter.
pub const ALLOWED_MEDIA_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Maximum accepted avatar size in bytes (5 MiB).
pub const MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

/// Placeholder shown whenever no canonical avatar is available.
pub const PLACEHOLDER_AVATAR_URI: &str = "/uploads/profile-images/noProfileImage.png";

/// Reference to an avatar resource.
///
/// Compared by identity only; the core never dereferences it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarUri(String);

impl AvatarUri {
    /// Creates a new URI from any string-like value.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Returns the URI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AvatarUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AvatarUri {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for AvatarUri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A user-chosen avatar file awaiting upload.
///
/// Content is held as [`Bytes`] so clones are cheap when the same file
/// flows into both the preview store and the save payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    file_name: String,
    media_type: String,
    content: Bytes,
}

impl AvatarFile {
    /// Creates a new avatar file.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            content: content.into(),
        }
    }

    /// Returns the original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the declared media type.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns the file content.
    #[must_use]
    pub const fn content(&self) -> &Bytes {
        &self.content
    }

    /// Returns the size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Checks the file against the avatar policy.
    ///
    /// The declared media type is checked first; size is only evaluated
    /// for an allowed type.
    ///
    /// # Errors
    /// Returns [`AvatarError::UnsupportedMediaType`] or
    /// [`AvatarError::FileTooLarge`].
    pub fn validate(&self) -> Result<(), AvatarError> {
        if !ALLOWED_MEDIA_TYPES.contains(&self.media_type.as_str()) {
            return Err(AvatarError::unsupported(&self.media_type));
        }
        if self.size() > MAX_AVATAR_BYTES {
            return Err(AvatarError::too_large(self.size()));
        }
        Ok(())
    }
}

/// Token for a live temporary preview resource.
///
/// Minted by a preview store and surrendered back to it on release.
/// Deliberately not `Clone`: each handle is released at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewHandle {
    uri: AvatarUri,
}

impl PreviewHandle {
    /// Creates a handle addressing the given URI.
    #[must_use]
    pub const fn new(uri: AvatarUri) -> Self {
        Self { uri }
    }

    /// Returns the URI the preview is reachable at.
    #[must_use]
    pub const fn uri(&self) -> &AvatarUri {
        &self.uri
    }

    /// Consumes the handle, yielding its URI.
    #[must_use]
    pub fn into_uri(self) -> AvatarUri {
        self.uri
    }
}
