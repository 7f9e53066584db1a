//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;

use album_core::delivery::DeliveryUrls;
use album_core::gallery::{GalleryEvent, ViewState};
use album_core::media::MediaApiClient;
use dioxus::prelude::*;

use crate::services::CaptureMode;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Listing cache, upload flag and lightbox selection
    pub view: Signal<ViewState>,
    /// Media service client, absent when the album is not configured
    pub client: Signal<Option<Arc<MediaApiClient>>>,
    pub urls: Signal<Option<DeliveryUrls>>,
    pub capture_mode: Signal<CaptureMode>,
    /// Configuration problem shown in place of the gallery
    pub config_error: Signal<Option<String>>,
}

impl AppState {
    /// Apply a grid or lightbox interaction.
    pub fn dispatch(&self, event: GalleryEvent) {
        let mut view = self.view;
        tracing::debug!(?event, "Gallery event");
        view.write().handle(event);
    }
}
