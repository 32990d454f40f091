//! Domain error types.

mod avatar_error;
mod save_error;
mod setup_error;

pub use avatar_error::AvatarError;
pub use save_error::SaveError;
pub use setup_error::SetupError;
