//! Capture, upload, then refresh the grid once.

use std::sync::Arc;

use album_core::capture::{CaptureOutcome, CaptureTrigger};
use album_core::gallery::ViewState;
use album_core::media::MediaApiClient;
use album_core::session::{upload_batch, NoticeSink, UploadView};
use album_core::MediaItem;
use dioxus::prelude::*;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

/// View signal adapter; every call is one short write.
struct SignalView(Signal<ViewState>);

impl UploadView for SignalView {
    fn begin_upload(&mut self) -> bool {
        self.0.write().begin_upload()
    }

    fn finish_upload(&mut self) {
        self.0.write().finish_upload();
    }

    fn apply_listing(&mut self, items: Vec<MediaItem>) {
        self.0.write().apply_listing(items);
    }
}

/// Blocking native message box.
struct DialogNotices;

impl NoticeSink for DialogNotices {
    async fn notify(&self, message: String) {
        show_upload_notice(message).await;
    }
}

/// Run one capture trigger to completion.
pub async fn capture_and_upload<T: CaptureTrigger>(
    trigger: T,
    client: Arc<MediaApiClient>,
    view: Signal<ViewState>,
) {
    if view.read().is_uploading {
        return;
    }

    let files = match trigger.request_files().await {
        Ok(CaptureOutcome::Selected(files)) => files,
        Ok(CaptureOutcome::Cancelled) => {
            tracing::debug!("Capture cancelled");
            return;
        }
        Err(error) => {
            tracing::error!("Failed to read selection: {}", error);
            show_upload_notice(format!("Could not read the selected file.\n\n{error}")).await;
            return;
        }
    };

    let outcomes = upload_batch(
        client.as_ref(),
        client.config(),
        &mut SignalView(view),
        &files,
        &DialogNotices,
    )
    .await;
    tracing::debug!(
        selected = files.len(),
        uploaded = outcomes.iter().filter(|outcome| outcome.is_uploaded()).count(),
        "Capture finished"
    );
}

async fn show_upload_notice(message: String) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Upload failed")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
