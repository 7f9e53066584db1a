//! One grid cell

use album_core::gallery::{GalleryEvent, GalleryTile};
use album_core::MediaKind;
use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::PALETTE;

const MEDIA_STYLE: &str = "display: block; width: 100%; height: 100%; object-fit: cover;";

/// Clicking the tile opens the lightbox. The download badge stops the click
/// from reaching the tile.
#[component]
pub fn MediaTile(tile: GalleryTile) -> Element {
    let state = use_context::<AppState>();
    let open_id = tile.public_id.clone();
    let download_id = tile.public_id.clone();

    rsx! {
        div {
            class: "photo-item",
            style: "
                position: relative;
                aspect-ratio: 1;
                overflow: hidden;
                border-radius: 8px;
                cursor: pointer;
                background: {PALETTE.bg_tile};
            ",
            onclick: move |_| state.dispatch(GalleryEvent::TileClicked(open_id.clone())),

            if tile.kind == MediaKind::Video {
                video {
                    src: "{tile.display_url}",
                    muted: true,
                    r#loop: true,
                    autoplay: true,
                    "playsinline": "true",
                    style: MEDIA_STYLE,
                }
            } else {
                img {
                    src: "{tile.display_url}",
                    alt: "Moment",
                    loading: "lazy",
                    style: MEDIA_STYLE,
                }
            }

            a {
                class: "download-badge",
                href: "{tile.download_url}",
                download: "",
                title: "Download",
                style: "
                    position: absolute;
                    right: 8px;
                    bottom: 8px;
                    padding: 6px 9px;
                    border-radius: 999px;
                    text-decoration: none;
                    background: rgba(0, 0, 0, 0.55);
                    color: {PALETTE.text_primary};
                ",
                onclick: move |evt| {
                    evt.stop_propagation();
                    state.dispatch(GalleryEvent::DownloadClicked(download_id.clone()));
                },
                "⬇"
            }
        }
    }
}
