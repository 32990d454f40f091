mod fullscreen_port;
mod preview_store_port;
mod profile_save_port;

pub use fullscreen_port::FullscreenPort;
pub use preview_store_port::PreviewStorePort;
pub use profile_save_port::{ProfileSavePort, ProfileUpdate};
