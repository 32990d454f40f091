//! Infrastructure layer with adapters for the domain ports.

/// Preview store adapters.
pub mod preview;

pub use preview::{InMemoryPreviewStore, TempFilePreviewStore};
