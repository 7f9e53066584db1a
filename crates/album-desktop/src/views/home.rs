//! Home view - the album page

use dioxus::prelude::*;

use crate::components::{GalleryGrid, Header, Lightbox};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Header, hero text, gallery and the lightbox overlay.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let config_error = (state.config_error)().unwrap_or_default();

    rsx! {
        div {
            class: "home-container",

            Header {}

            section {
                class: "hero",
                style: "text-align: center; padding: 32px 24px 24px;",
                h1 { style: "margin: 0 0 12px; font-size: 2.2rem;", "Our Party Album" }
                p {
                    style: "margin: 0 auto; max-width: 520px; color: {PALETTE.text_muted};",
                    "Thanks for celebrating with us! Share your favourite photos and videos from tonight here."
                }
            }

            if !config_error.is_empty() {
                div {
                    class: "config-error",
                    style: "margin: 0 24px 24px; padding: 12px 16px; border-radius: 8px; background: #3a1d1d; color: #f3b7b7;",
                    "{config_error}"
                }
            }

            div {
                class: "gallery-container",
                GalleryGrid {}
            }

            Lightbox {}
        }
    }
}
