//! Domain entity definitions.

mod avatar;
mod interview;
mod profile;
mod stats;

pub use avatar::{
    ALLOWED_MEDIA_TYPES, AvatarFile, AvatarUri, MAX_AVATAR_BYTES, PLACEHOLDER_AVATAR_URI,
    PreviewHandle,
};
pub use interview::{Difficulty, InterviewMode, InterviewSession, Role};
pub use profile::Profile;
pub use stats::DashboardStats;
