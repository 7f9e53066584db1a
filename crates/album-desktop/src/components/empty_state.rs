use dioxus::prelude::*;

use crate::theme::PALETTE;

/// Prompt shown once loading finished with no items.
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div {
            class: "empty-state",
            style: "text-align: center; padding: 80px; color: {PALETTE.text_muted};",
            div { style: "font-size: 48px; margin-bottom: 20px;", "📷" }
            p { "No memories yet." }
            p { style: "font-size: 0.9rem;", "Be the first to share!" }
        }
    }
}
