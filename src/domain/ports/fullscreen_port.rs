//! Fullscreen surface port definition.

use crate::domain::errors::SetupError;

/// Port for the host's fullscreen surface.
///
/// Browser hosts chain vendor-prefixed request APIs behind this;
/// terminal or test hosts can grant unconditionally.
pub trait FullscreenPort: Send + Sync {
    /// Requests fullscreen.
    ///
    /// # Errors
    /// Returns [`SetupError::FullscreenDenied`] when the host refuses.
    fn enter(&self) -> Result<(), SetupError>;

    /// Leaves fullscreen. Best effort.
    fn exit(&self);
}
