//! Profile save port definition.

use async_trait::async_trait;

use crate::domain::entities::AvatarFile;
use crate::domain::errors::SaveError;

/// Payload sent to the save collaborator.
///
/// Carries the avatar file only when a new one was selected; an empty
/// update signals "no change requested".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// Newly selected avatar, if any.
    pub avatar_file: Option<AvatarFile>,
}

impl ProfileUpdate {
    /// Creates an update requesting no change.
    #[must_use]
    pub const fn empty() -> Self {
        Self { avatar_file: None }
    }

    /// Creates an update carrying a new avatar.
    #[must_use]
    pub const fn with_avatar(file: AvatarFile) -> Self {
        Self {
            avatar_file: Some(file),
        }
    }

    /// Returns whether the update requests no change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.avatar_file.is_none()
    }
}

/// Port for persisting profile changes.
///
/// The backend protocol behind this port is the adapter's business.
#[async_trait]
pub trait ProfileSavePort: Send + Sync {
    /// Persists the update.
    ///
    /// # Errors
    /// Returns [`SaveError`] when the backend fails or refuses.
    async fn save_profile(&self, update: ProfileUpdate) -> Result<(), SaveError>;
}
