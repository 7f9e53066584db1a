//! Full-size overlay for the selected item

use album_core::gallery::GalleryEvent;
use album_core::MediaKind;
use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::PALETTE;

const CONTENT_STYLE: &str = "max-width: 92vw; max-height: 88vh; border-radius: 6px;";

/// Renders nothing until a tile is selected. Clicking anywhere on the
/// overlay, or the close control, dismisses it.
#[component]
pub fn Lightbox() -> Element {
    let state = use_context::<AppState>();
    let Some(urls) = (state.urls)() else {
        return rsx! {};
    };
    let Some(selected) = state.view.read().lightbox(&urls) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "lightbox-overlay",
            style: "
                position: fixed;
                inset: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {PALETTE.overlay};
            ",
            onclick: move |_| state.dispatch(GalleryEvent::OverlayClicked),

            button {
                class: "close-btn",
                style: "
                    position: absolute;
                    top: 16px;
                    right: 20px;
                    border: none;
                    background: transparent;
                    font-size: 28px;
                    cursor: pointer;
                    color: {PALETTE.text_primary};
                ",
                onclick: move |evt| {
                    evt.stop_propagation();
                    state.dispatch(GalleryEvent::CloseClicked);
                },
                "✕"
            }

            if selected.kind == MediaKind::Video {
                video {
                    class: "lightbox-content",
                    src: "{selected.source_url}",
                    controls: true,
                    autoplay: true,
                    style: CONTENT_STYLE,
                }
            } else {
                img {
                    class: "lightbox-content",
                    src: "{selected.source_url}",
                    alt: "Full screen",
                    style: CONTENT_STYLE,
                }
            }
        }
    }
}
