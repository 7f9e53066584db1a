//! Album session: one owner for config, media store, and view state.
//!
//! Front-ends that can hold `&mut` across awaits (the CLI, tests) drive the
//! album through `AlbumSession`. The desktop shell keeps `ViewState` in a
//! signal and composes the same pieces itself.

use crate::capture::SelectedFile;
use crate::config::AlbumConfig;
use crate::delivery::DeliveryUrls;
use crate::gallery::{GalleryEvent, GalleryPhase, ViewState};
use crate::media::{MediaStore, UploadReceipt};
use crate::models::MediaItem;
use crate::refresh::refresh_after_upload;

/// Result of one upload attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    /// The service accepted the file.
    Uploaded(UploadReceipt),
    /// The upload failed; the message is meant for a blocking notice.
    Failed(String),
    /// Another upload is still in flight.
    Busy,
}

impl UploadOutcome {
    #[must_use]
    pub const fn is_uploaded(&self) -> bool {
        matches!(self, Self::Uploaded(_))
    }
}

/// Build the user-facing notice for a failed upload.
pub fn upload_failure_notice(file_name: &str, error: &crate::Error) -> String {
    format!("Could not upload {file_name}. Please try again.\n\n{error}")
}

/// View state the upload flow reports into.
///
/// `ViewState` implements it directly; UI shells wrap their reactive handle
/// so each call is a short write.
pub trait UploadView {
    fn begin_upload(&mut self) -> bool;
    fn finish_upload(&mut self);
    fn apply_listing(&mut self, items: Vec<MediaItem>);
}

impl UploadView for ViewState {
    fn begin_upload(&mut self) -> bool {
        Self::begin_upload(self)
    }

    fn finish_upload(&mut self) {
        Self::finish_upload(self);
    }

    fn apply_listing(&mut self, items: Vec<MediaItem>) {
        Self::apply_listing(self, items);
    }
}

/// Receiver for blocking upload-failure notices.
#[allow(async_fn_in_trait)]
pub trait NoticeSink {
    async fn notify(&self, message: String);
}

/// Headless front-ends report failures through the returned outcomes.
impl NoticeSink for () {
    async fn notify(&self, _message: String) {}
}

/// Upload a selection in order under one uploading flag.
///
/// Failure notices are delivered after the flag is cleared. When at least one
/// file was accepted the listing is refreshed once after the configured
/// delay. Returns `Busy` for every file when an upload is already in flight.
pub async fn upload_batch<S, V, N>(
    store: &S,
    config: &AlbumConfig,
    view: &mut V,
    files: &[SelectedFile],
    notices: &N,
) -> Vec<UploadOutcome>
where
    S: MediaStore,
    V: UploadView,
    N: NoticeSink,
{
    if !view.begin_upload() {
        tracing::warn!(files = files.len(), "Upload already in flight");
        return files.iter().map(|_| UploadOutcome::Busy).collect();
    }

    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let outcome = match store.upload(file, &config.tag).await {
            Ok(receipt) => UploadOutcome::Uploaded(receipt),
            Err(error) => {
                tracing::error!(file = %file.file_name, "Upload failed: {}", error);
                UploadOutcome::Failed(upload_failure_notice(&file.file_name, &error))
            }
        };
        outcomes.push(outcome);
    }
    view.finish_upload();

    for outcome in &outcomes {
        if let UploadOutcome::Failed(notice) = outcome {
            notices.notify(notice.clone()).await;
        }
    }

    if outcomes.iter().any(UploadOutcome::is_uploaded) {
        let items = refresh_after_upload(store, &config.tag, config.refresh_delay).await;
        tracing::info!(count = items.len(), "Album refreshed after upload");
        view.apply_listing(items);
    }

    outcomes
}

pub struct AlbumSession<S> {
    config: AlbumConfig,
    urls: DeliveryUrls,
    store: S,
    state: ViewState,
}

impl<S: MediaStore> AlbumSession<S> {
    pub fn new(config: AlbumConfig, store: S) -> Self {
        let urls = DeliveryUrls::new(&config);
        Self {
            config,
            urls,
            store,
            state: ViewState::new(),
        }
    }

    pub const fn config(&self) -> &AlbumConfig {
        &self.config
    }

    pub const fn urls(&self) -> &DeliveryUrls {
        &self.urls
    }

    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the listing and replace the cached items.
    pub async fn load(&mut self) -> GalleryPhase {
        let items = self.store.list_by_tag(&self.config.tag).await;
        self.state.apply_listing(items);
        self.state.phase()
    }

    /// Upload one file without refreshing.
    pub async fn upload(&mut self, file: &SelectedFile) -> UploadOutcome {
        if !self.state.begin_upload() {
            return UploadOutcome::Busy;
        }

        let result = self.store.upload(file, &self.config.tag).await;
        self.state.finish_upload();

        match result {
            Ok(receipt) => UploadOutcome::Uploaded(receipt),
            Err(error) => {
                tracing::error!(file = %file.file_name, "Upload failed: {}", error);
                UploadOutcome::Failed(upload_failure_notice(&file.file_name, &error))
            }
        }
    }

    /// Upload one file and, if accepted, refresh after the configured delay.
    pub async fn upload_and_refresh(&mut self, file: &SelectedFile) -> UploadOutcome {
        let outcome = self.upload(file).await;
        if outcome.is_uploaded() {
            self.refresh().await;
        }
        outcome
    }

    /// Upload a picker selection in order, then refresh once if anything
    /// was accepted.
    pub async fn upload_selection(&mut self, files: &[SelectedFile]) -> Vec<UploadOutcome> {
        upload_batch(&self.store, &self.config, &mut self.state, files, &()).await
    }

    /// Apply a grid/lightbox interaction.
    pub fn handle(&mut self, event: GalleryEvent) -> bool {
        self.state.handle(event)
    }

    async fn refresh(&mut self) {
        let items =
            refresh_after_upload(&self.store, &self.config.tag, self.config.refresh_delay).await;
        self.state.apply_listing(items);
    }
}
