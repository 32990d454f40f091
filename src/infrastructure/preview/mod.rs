//! Preview store adapters.

mod memory_store;
mod temp_file_store;

pub use memory_store::InMemoryPreviewStore;
pub use temp_file_store::TempFilePreviewStore;
