//! Gallery and lightbox view state.
//!
//! `ViewState` is a read-only cache of the last listing, replaced wholesale
//! on every fetch. Selection for the lightbox is an orthogonal toggle driven
//! by `GalleryEvent`s.

use crate::delivery::DeliveryUrls;
use crate::models::{MediaItem, MediaKind};

/// Which of the three gallery renderings applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryPhase {
    /// Initial fetch still pending; show a placeholder.
    Loading,
    /// Fetch finished with no items; show the empty-state prompt.
    Empty,
    /// Fetch finished with items; show the grid.
    Populated,
}

/// Discrete user interactions with the grid and lightbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A tile body was clicked.
    TileClicked(String),
    /// A tile's download control was clicked.
    DownloadClicked(String),
    /// The lightbox backdrop was clicked.
    OverlayClicked,
    /// The lightbox close control was clicked.
    CloseClicked,
}

/// In-memory state for the album view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub items: Vec<MediaItem>,
    pub is_loading: bool,
    pub is_uploading: bool,
    pub selected: Option<MediaItem>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            is_uploading: false,
            selected: None,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> GalleryPhase {
        if self.is_loading {
            GalleryPhase::Loading
        } else if self.items.is_empty() {
            GalleryPhase::Empty
        } else {
            GalleryPhase::Populated
        }
    }

    /// Replace the cached listing and finish loading.
    pub fn apply_listing(&mut self, items: Vec<MediaItem>) {
        self.items = items;
        self.is_loading = false;
    }

    /// Mark an upload in flight. Returns `false` when one already is, which
    /// is the trigger's disabled state.
    pub fn begin_upload(&mut self) -> bool {
        if self.is_uploading {
            return false;
        }
        self.is_uploading = true;
        true
    }

    pub fn finish_upload(&mut self) {
        self.is_uploading = false;
    }

    /// Apply one interaction. Returns whether the selection changed.
    pub fn handle(&mut self, event: GalleryEvent) -> bool {
        let before = self.selected.clone();
        match event {
            GalleryEvent::TileClicked(public_id) => {
                if let Some(item) = self.find(&public_id) {
                    self.selected = Some(item.clone());
                }
            }
            // Download is isolated from the tile's click handler.
            GalleryEvent::DownloadClicked(_) => {}
            GalleryEvent::OverlayClicked | GalleryEvent::CloseClicked => {
                self.selected = None;
            }
        }
        before != self.selected
    }

    #[must_use]
    pub fn find(&self, public_id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.public_id == public_id)
    }

    /// Render models for the grid, in listing order.
    #[must_use]
    pub fn tiles(&self, urls: &DeliveryUrls) -> Vec<GalleryTile> {
        self.items
            .iter()
            .map(|item| GalleryTile::new(item, urls))
            .collect()
    }

    /// Render model for the lightbox, when an item is selected.
    #[must_use]
    pub fn lightbox(&self, urls: &DeliveryUrls) -> Option<LightboxView> {
        self.selected.as_ref().map(|item| LightboxView {
            public_id: item.public_id.clone(),
            kind: item.kind(),
            source_url: urls.full(item),
        })
    }
}

/// One grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryTile {
    pub public_id: String,
    pub kind: MediaKind,
    pub display_url: String,
    pub download_url: String,
}

impl GalleryTile {
    fn new(item: &MediaItem, urls: &DeliveryUrls) -> Self {
        Self {
            public_id: item.public_id.clone(),
            kind: item.kind(),
            display_url: urls.thumbnail(item),
            download_url: urls.download(item),
        }
    }
}

/// Full-size single item overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxView {
    pub public_id: String,
    pub kind: MediaKind,
    pub source_url: String,
}
