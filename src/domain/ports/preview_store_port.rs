//! Preview resource store port definition.

use crate::domain::entities::{AvatarFile, PreviewHandle};
use crate::domain::errors::AvatarError;

/// Port for minting and releasing temporary preview resources.
///
/// The avatar editor is the exclusive owner of at most one live handle;
/// it releases every handle it creates exactly once. Adapters must treat
/// release of an unknown handle as a no-op.
pub trait PreviewStorePort: Send + Sync {
    /// Creates a temporary preview resource bound to the file.
    ///
    /// # Errors
    /// Returns [`AvatarError::Preview`] when the resource cannot be
    /// created.
    fn create(&self, file: &AvatarFile) -> Result<PreviewHandle, AvatarError>;

    /// Releases a previously created resource.
    fn release(&self, handle: PreviewHandle);
}
