//! In-memory preview store implementation.

use std::collections::HashMap;

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::domain::entities::{AvatarFile, AvatarUri, PreviewHandle};
use crate::domain::errors::AvatarError;
use crate::domain::ports::PreviewStorePort;

/// Preview store keeping file content in memory under `mem://` URIs.
///
/// The object-URL analog for hosts without a filesystem; `fetch` hands
/// the bytes back to whatever renders the preview.
#[derive(Debug, Default)]
pub struct InMemoryPreviewStore {
    entries: Mutex<HashMap<AvatarUri, Bytes>>,
}

impl InMemoryPreviewStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the content behind a live preview URI.
    #[must_use]
    pub fn fetch(&self, uri: &AvatarUri) -> Option<Bytes> {
        self.entries.lock().get(uri).cloned()
    }

    /// Number of live previews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns whether no previews are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl PreviewStorePort for InMemoryPreviewStore {
    fn create(&self, file: &AvatarFile) -> Result<PreviewHandle, AvatarError> {
        let uri = AvatarUri::new(format!("mem://preview/{}", Uuid::new_v4()));
        self.entries.lock().insert(uri.clone(), file.content().clone());
        trace!(uri = %uri, size = file.size(), "stored preview in memory");
        Ok(PreviewHandle::new(uri))
    }

    fn release(&self, handle: PreviewHandle) {
        let uri = handle.into_uri();
        if self.entries.lock().remove(&uri).is_some() {
            trace!(uri = %uri, "released in-memory preview");
        } else {
            debug!(uri = %uri, "release of unknown preview ignored");
        }
    }
}
