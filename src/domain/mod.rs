//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AvatarFile, AvatarUri, PreviewHandle, Profile};
pub use errors::{AvatarError, SaveError, SetupError};
pub use ports::{FullscreenPort, PreviewStorePort, ProfileSavePort, ProfileUpdate};
