//! User profile entity.

use serde::{Deserialize, Serialize};

use super::avatar::AvatarUri;

/// Profile data shown by the profile editor.
///
/// Name and email are read-only in the editor; only the avatar can be
/// changed. The avatar field holds the canonical (last-persisted)
/// reference, absent for accounts that never uploaded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    name: Option<String>,
    email: Option<String>,
    avatar: Option<AvatarUri>,
}

impl Profile {
    /// Creates an empty profile.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            name: None,
            email: None,
            avatar: None,
        }
    }

    /// Creates a profile with the given fields.
    #[must_use]
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        avatar: Option<AvatarUri>,
    ) -> Self {
        Self {
            name,
            email,
            avatar,
        }
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the canonical avatar.
    #[must_use]
    pub fn with_avatar(mut self, avatar: AvatarUri) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Returns the name, if provided.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the email, if provided.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the canonical avatar reference, if any.
    #[must_use]
    pub const fn avatar(&self) -> Option<&AvatarUri> {
        self.avatar.as_ref()
    }

    /// Name as rendered by the editor.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Not provided")
    }

    /// Email as rendered by the editor.
    #[must_use]
    pub fn display_email(&self) -> &str {
        self.email.as_deref().filter(|e| !e.is_empty()).unwrap_or("Not provided")
    }
}
