//! Temp-file-backed preview store implementation.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use tempfile::TempDir;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::domain::entities::{AvatarFile, AvatarUri, PreviewHandle};
use crate::domain::errors::AvatarError;
use crate::domain::ports::PreviewStorePort;

/// Preview store writing files into a private temp directory.
///
/// Previews are addressable as `file://` URIs for hosts that render
/// from disk. Released previews are deleted eagerly; whatever is left
/// goes away with the directory when the store is dropped.
#[derive(Debug)]
pub struct TempFilePreviewStore {
    dir: TempDir,
    live: Mutex<HashMap<AvatarUri, PathBuf>>,
}

impl TempFilePreviewStore {
    /// Creates a store with a fresh temp directory.
    ///
    /// # Errors
    /// Returns [`AvatarError::Preview`] when the directory cannot be
    /// created.
    pub fn new() -> Result<Self, AvatarError> {
        let dir = TempDir::with_prefix("prepdeck-preview-")
            .map_err(|e| AvatarError::preview(e.to_string()))?;
        debug!(path = %dir.path().display(), "created preview directory");
        Ok(Self {
            dir,
            live: Mutex::new(HashMap::new()),
        })
    }

    /// Number of live previews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.lock().len()
    }

    /// Returns whether no previews are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.lock().is_empty()
    }

    fn extension_for(media_type: &str) -> &'static str {
        match media_type {
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "jpg",
        }
    }
}

impl PreviewStorePort for TempFilePreviewStore {
    fn create(&self, file: &AvatarFile) -> Result<PreviewHandle, AvatarError> {
        let name = format!(
            "{}.{}",
            Uuid::new_v4(),
            Self::extension_for(file.media_type())
        );
        let path = self.dir.path().join(name);
        fs::write(&path, file.content()).map_err(|e| AvatarError::preview(e.to_string()))?;

        let uri = AvatarUri::new(format!("file://{}", path.display()));
        self.live.lock().insert(uri.clone(), path);
        trace!(uri = %uri, size = file.size(), "wrote preview file");
        Ok(PreviewHandle::new(uri))
    }

    fn release(&self, handle: PreviewHandle) {
        let uri = handle.into_uri();
        let Some(path) = self.live.lock().remove(&uri) else {
            debug!(uri = %uri, "release of unknown preview ignored");
            return;
        };
        if let Err(e) = fs::remove_file(&path) {
            debug!(path = %path.display(), error = %e, "preview file already gone");
        } else {
            trace!(uri = %uri, "deleted preview file");
        }
    }
}
