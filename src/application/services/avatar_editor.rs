//! Avatar editing service.
//!
//! Owns the preview shown by the profile editor: the canonical avatar,
//! the placeholder, or a temporary preview of a newly chosen file. The
//! editor is the sole owner of the temporary resource and releases every
//! handle it creates exactly once, releasing the old one before minting
//! a replacement.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::domain::entities::{
    AvatarFile, AvatarUri, PLACEHOLDER_AVATAR_URI, PreviewHandle, Profile,
};
use crate::domain::errors::{AvatarError, SaveError};
use crate::domain::ports::{PreviewStorePort, ProfileSavePort, ProfileUpdate};

/// Observable handle to the editor's busy state.
///
/// Cloneable so hosts can hold one across an outstanding save and
/// disable mutation controls while it reads set.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// Returns whether a save is outstanding.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set(&self, value: bool) {
        self.0.store(value, Ordering::SeqCst);
    }
}

/// A validated selection with its live preview resource.
#[derive(Debug)]
struct PendingSelection {
    handle: PreviewHandle,
    file: AvatarFile,
}

/// Manages the avatar preview lifecycle for the profile editor.
///
/// Mutating operations take `&mut self`, so a host cannot interleave
/// `select_file` with an outstanding [`save`](Self::save); the busy flag
/// exists so hosts can also disable their controls during the call.
pub struct AvatarEditor {
    canonical: Option<AvatarUri>,
    placeholder: AvatarUri,
    pending: Option<PendingSelection>,
    validation_error: Option<String>,
    busy: BusyFlag,
    preview_store: Arc<dyn PreviewStorePort>,
    save_port: Arc<dyn ProfileSavePort>,
}

impl AvatarEditor {
    /// Creates an editor showing the canonical avatar, or the default
    /// placeholder when none exists.
    #[must_use]
    pub fn new(
        canonical: Option<AvatarUri>,
        preview_store: Arc<dyn PreviewStorePort>,
        save_port: Arc<dyn ProfileSavePort>,
    ) -> Self {
        Self {
            canonical,
            placeholder: AvatarUri::new(PLACEHOLDER_AVATAR_URI),
            pending: None,
            validation_error: None,
            busy: BusyFlag::default(),
            preview_store,
            save_port,
        }
    }

    /// Creates an editor for the given profile's canonical avatar.
    #[must_use]
    pub fn for_profile(
        profile: &Profile,
        preview_store: Arc<dyn PreviewStorePort>,
        save_port: Arc<dyn ProfileSavePort>,
    ) -> Self {
        Self::new(profile.avatar().cloned(), preview_store, save_port)
    }

    /// Overrides the placeholder URI.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: AvatarUri) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// URI the host should render right now.
    #[must_use]
    pub fn preview_uri(&self) -> &AvatarUri {
        match &self.pending {
            Some(pending) => pending.handle.uri(),
            None => self.canonical.as_ref().unwrap_or(&self.placeholder),
        }
    }

    /// The selected file awaiting save, if any.
    #[must_use]
    pub fn pending_file(&self) -> Option<&AvatarFile> {
        self.pending.as_ref().map(|p| &p.file)
    }

    /// Returns whether an unsaved selection exists.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Current user-visible validation message, if any.
    #[must_use]
    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// Returns whether a save is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    /// Returns an observable handle to the busy state.
    #[must_use]
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Accepts a user-chosen file, or does nothing when none was chosen.
    ///
    /// The declared type is checked first, then the size; the first
    /// failing check wins and leaves the prior preview and pending file
    /// untouched. On success the prior temporary resource (if any) is
    /// released before the replacement is created.
    ///
    /// # Errors
    /// Returns [`AvatarError`]; the user-facing message is also
    /// recorded and readable via
    /// [`validation_error`](Self::validation_error).
    pub fn select_file(&mut self, file: Option<AvatarFile>) -> Result<(), AvatarError> {
        let Some(file) = file else {
            return Ok(());
        };

        if let Err(err) = file.validate() {
            warn!(
                file = file.file_name(),
                media_type = file.media_type(),
                size = file.size(),
                error = %err,
                "rejected avatar selection"
            );
            self.validation_error = Some(err.user_message());
            return Err(err);
        }

        self.validation_error = None;
        self.release_pending();

        let handle = match self.preview_store.create(&file) {
            Ok(handle) => handle,
            Err(err) => {
                // The old preview is already gone; fall back to the
                // canonical avatar rather than keep a dangling handle.
                warn!(error = %err, "preview creation failed");
                self.validation_error = Some(err.user_message());
                return Err(err);
            }
        };

        debug!(uri = %handle.uri(), file = file.file_name(), "created avatar preview");
        self.pending = Some(PendingSelection { handle, file });
        Ok(())
    }

    /// Reconciles the editor against a changed canonical avatar.
    ///
    /// Releases any held temporary resource and drops the pending file.
    /// Idempotent. The validation message is left as-is.
    pub fn reset(&mut self, canonical: Option<AvatarUri>) {
        self.release_pending();
        self.canonical = canonical;
    }

    /// Releases any held temporary resource. No-op when none is held.
    ///
    /// Hosts without scope-based cleanup must call this exactly once
    /// when discarding the editor; dropping the editor releases as a
    /// backstop either way.
    pub fn teardown(&mut self) {
        self.release_pending();
    }

    /// Sends the pending change (or an empty update) to the save port.
    ///
    /// The busy flag is set for the duration of the call and cleared on
    /// success and failure alike. Nothing else changes on failure: the
    /// pending file and preview stay put, and the error is returned
    /// unmodified.
    ///
    /// # Errors
    /// Propagates [`SaveError`] from the save collaborator.
    pub async fn save(&mut self) -> Result<(), SaveError> {
        let update = match &self.pending {
            Some(pending) => ProfileUpdate::with_avatar(pending.file.clone()),
            None => ProfileUpdate::empty(),
        };
        debug!(has_avatar = !update.is_empty(), "saving profile");

        self.busy.set(true);
        let result = self.save_port.save_profile(update).await;
        self.busy.set(false);

        if let Err(err) = &result {
            warn!(error = %err, "profile save failed");
        }
        result
    }

    fn release_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(uri = %pending.handle.uri(), "releasing avatar preview");
            self.preview_store.release(pending.handle);
        }
    }
}

impl Drop for AvatarEditor {
    fn drop(&mut self) {
        self.release_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MAX_AVATAR_BYTES;
    use crate::domain::ports::mocks::{CountingPreviewStore, MockProfileSaver};

    fn png(size: usize) -> AvatarFile {
        AvatarFile::new("avatar.png", "image/png", vec![0u8; size])
    }

    fn editor(
        canonical: Option<AvatarUri>,
    ) -> (AvatarEditor, Arc<CountingPreviewStore>, Arc<MockProfileSaver>) {
        let store = Arc::new(CountingPreviewStore::new());
        let saver = Arc::new(MockProfileSaver::new(true));
        let editor = AvatarEditor::new(canonical, store.clone(), saver.clone());
        (editor, store, saver)
    }

    #[test]
    fn no_file_is_a_noop() {
        let (mut editor, store, _) = editor(None);
        assert!(editor.select_file(None).is_ok());
        assert_eq!(store.created(), 0);
        assert!(editor.pending_file().is_none());
        assert!(editor.validation_error().is_none());
    }

    #[test]
    fn disallowed_type_leaves_state_untouched() {
        let (mut editor, store, _) = editor(Some(AvatarUri::new("/uploads/old.png")));
        editor.select_file(Some(png(100))).unwrap();
        let uri_before = editor.preview_uri().clone();

        let bad = AvatarFile::new("notes.txt", "text/plain", vec![0u8; 10]);
        let result = editor.select_file(Some(bad));

        assert!(matches!(
            result,
            Err(AvatarError::UnsupportedMediaType { .. })
        ));
        assert_eq!(editor.preview_uri(), &uri_before);
        assert_eq!(editor.pending_file().unwrap().file_name(), "avatar.png");
        assert_eq!(
            editor.validation_error(),
            Some("Please select a valid image file (JPEG, PNG, GIF, or WebP)")
        );
        // The rejection released nothing.
        assert_eq!(store.released(), 0);
    }

    #[test]
    fn oversized_file_leaves_state_untouched() {
        let (mut editor, store, _) = editor(None);
        let uri_before = editor.preview_uri().clone();

        let big = png(MAX_AVATAR_BYTES as usize + 1);
        let result = editor.select_file(Some(big));

        assert!(matches!(result, Err(AvatarError::FileTooLarge { .. })));
        assert_eq!(editor.preview_uri(), &uri_before);
        assert!(editor.pending_file().is_none());
        assert_eq!(
            editor.validation_error(),
            Some("Image size must be less than 5MB")
        );
        assert_eq!(store.created(), 0);
        assert_eq!(store.released(), 0);
    }

    #[test]
    fn valid_selection_replaces_preview_and_clears_error() {
        let (mut editor, store, _) = editor(Some(AvatarUri::new("/uploads/old.png")));

        // Leave a stale validation message behind first.
        let _ = editor.select_file(Some(AvatarFile::new("x", "text/plain", vec![0u8; 1])));
        assert!(editor.validation_error().is_some());

        editor.select_file(Some(png(1024))).unwrap();

        assert!(editor.validation_error().is_none());
        assert_eq!(editor.preview_uri().as_str(), "mock://preview/1");
        assert_eq!(editor.pending_file().unwrap().size(), 1024);
        assert_eq!(store.created(), 1);
        assert_eq!(store.released(), 0);
    }

    #[test]
    fn reselection_releases_prior_resource_exactly_once() {
        let (mut editor, store, _) = editor(None);

        editor.select_file(Some(png(10))).unwrap();
        editor.select_file(Some(png(20))).unwrap();

        assert_eq!(store.created(), 2);
        assert_eq!(store.released(), 1);
        assert_eq!(store.live(), 1);
        assert_eq!(editor.preview_uri().as_str(), "mock://preview/2");
        assert_eq!(editor.pending_file().unwrap().size(), 20);
    }

    #[test]
    fn create_failure_falls_back_to_canonical() {
        let (mut editor, store, _) = editor(Some(AvatarUri::new("/uploads/old.png")));
        editor.select_file(Some(png(10))).unwrap();

        store.fail_next_create();
        let result = editor.select_file(Some(png(20)));

        assert!(matches!(result, Err(AvatarError::Preview { .. })));
        // Old handle was released, nothing dangles.
        assert_eq!(store.released(), 1);
        assert_eq!(store.live(), 0);
        assert!(editor.pending_file().is_none());
        assert_eq!(editor.preview_uri().as_str(), "/uploads/old.png");
        assert!(editor.validation_error().is_some());
    }

    #[test]
    fn reset_is_idempotent_and_releases_at_most_one() {
        let (mut editor, store, _) = editor(None);
        editor.select_file(Some(png(10))).unwrap();

        let canonical = AvatarUri::new("/uploads/new.png");
        editor.reset(Some(canonical.clone()));
        editor.reset(Some(canonical.clone()));

        assert_eq!(store.released(), 1);
        assert_eq!(editor.preview_uri(), &canonical);
        assert!(editor.pending_file().is_none());
    }

    #[test]
    fn reset_without_canonical_shows_placeholder() {
        let (mut editor, _, _) = editor(Some(AvatarUri::new("/uploads/old.png")));
        editor.reset(None);
        assert_eq!(editor.preview_uri().as_str(), PLACEHOLDER_AVATAR_URI);
    }

    #[test]
    fn for_profile_uses_the_canonical_avatar() {
        let store = Arc::new(CountingPreviewStore::new());
        let saver = Arc::new(MockProfileSaver::new(true));
        let profile = Profile::empty().with_avatar(AvatarUri::new("/uploads/ada.png"));
        let editor = AvatarEditor::for_profile(&profile, store, saver);
        assert_eq!(editor.preview_uri().as_str(), "/uploads/ada.png");
    }

    #[test]
    fn custom_placeholder_is_honored() {
        let store = Arc::new(CountingPreviewStore::new());
        let saver = Arc::new(MockProfileSaver::new(true));
        let editor = AvatarEditor::new(None, store, saver)
            .with_placeholder(AvatarUri::new("asset://fallback.png"));
        assert_eq!(editor.preview_uri().as_str(), "asset://fallback.png");
    }

    #[test]
    fn teardown_releases_only_the_held_resource() {
        let (mut editor, store, _) = editor(None);
        for size in [10, 20, 30] {
            editor.select_file(Some(png(size))).unwrap();
        }
        let released_before = store.released();

        editor.teardown();

        assert_eq!(store.released(), released_before + 1);
        assert_eq!(store.live(), 0);

        // A second teardown releases nothing further.
        editor.teardown();
        assert_eq!(store.released(), released_before + 1);
    }

    #[test]
    fn drop_is_a_backstop_not_a_double_release() {
        let (mut editor, store, _) = editor(None);
        editor.select_file(Some(png(10))).unwrap();
        editor.teardown();
        drop(editor);
        assert_eq!(store.released(), 1);

        let (mut editor, store, _) = self::editor(None);
        editor.select_file(Some(png(10))).unwrap();
        drop(editor);
        assert_eq!(store.released(), 1);
    }

    #[tokio::test]
    async fn save_without_selection_sends_empty_update() {
        let (mut editor, _, saver) = editor(None);
        editor.save().await.unwrap();

        let updates = saver.updates();
        assert_eq!(updates.len(), 1);
        assert!(updates[0].is_empty());
    }

    #[tokio::test]
    async fn save_after_selection_sends_exactly_that_file() {
        let (mut editor, _, saver) = editor(None);
        let file = png(512);
        editor.select_file(Some(file.clone())).unwrap();

        editor.save().await.unwrap();

        let updates = saver.updates();
        assert_eq!(updates[0].avatar_file.as_ref(), Some(&file));
    }

    #[tokio::test]
    async fn busy_is_set_during_save_and_cleared_after() {
        let (mut editor, _, saver) = editor(None);
        let flag = editor.busy_flag();
        saver.set_probe({
            let flag = flag.clone();
            move || flag.is_set()
        });

        assert!(!editor.is_busy());
        editor.save().await.unwrap();

        assert_eq!(saver.probed(), vec![true]);
        assert!(!editor.is_busy());
    }

    #[tokio::test]
    async fn failed_save_clears_busy_and_keeps_state() {
        let (mut editor, _, saver) = editor(None);
        saver.set_should_succeed(false);
        let file = png(64);
        editor.select_file(Some(file.clone())).unwrap();
        let uri_before = editor.preview_uri().clone();

        let result = editor.save().await;

        assert!(matches!(result, Err(SaveError::Rejected { .. })));
        assert!(!editor.is_busy());
        assert_eq!(editor.pending_file(), Some(&file));
        assert_eq!(editor.preview_uri(), &uri_before);
    }

    #[tokio::test]
    async fn end_to_end_edit_flow() {
        let (mut editor, store, saver) = editor(Some(AvatarUri::new("/uploads/old.png")));
        let flag = editor.busy_flag();
        saver.set_probe(move || flag.is_set());

        // Invalid selection: error shown, preview unchanged.
        let bad = AvatarFile::new("doc.pdf", "application/pdf", vec![0u8; 100]);
        assert!(editor.select_file(Some(bad)).is_err());
        assert!(editor.validation_error().is_some());
        assert_eq!(editor.preview_uri().as_str(), "/uploads/old.png");

        // Valid 1 KB PNG: preview updates, error cleared.
        let file = png(1024);
        editor.select_file(Some(file.clone())).unwrap();
        assert!(editor.validation_error().is_none());
        assert_eq!(editor.preview_uri().as_str(), "mock://preview/1");

        // Save: payload carries exactly that file, busy toggles.
        editor.save().await.unwrap();
        assert_eq!(saver.updates()[0].avatar_file.as_ref(), Some(&file));
        assert_eq!(saver.probed(), vec![true]);
        assert!(!editor.is_busy());

        editor.teardown();
        assert_eq!(store.live(), 0);
    }
}
