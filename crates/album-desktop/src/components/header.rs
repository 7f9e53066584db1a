//! Floating header with the capture controls

use dioxus::prelude::*;

use crate::services::{capture_and_upload, DialogTrigger};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Logo plus one button per capture trigger. Buttons are disabled while an
/// upload is in flight or when the album is not configured.
#[component]
pub fn Header() -> Element {
    let state = use_context::<AppState>();

    let client = (state.client)();
    let max_file_size = client
        .as_ref()
        .map_or(album_core::config::DEFAULT_MAX_FILE_SIZE, |client| {
            client.config().max_file_size
        });
    let controls = (state.capture_mode)().buttons(max_file_size);
    let uploading = state.view.read().is_uploading;
    let disabled = uploading || client.is_none();
    let opacity = if disabled { "0.5" } else { "1" };

    rsx! {
        header {
            class: "header",
            style: "
                position: sticky;
                top: 0;
                z-index: 10;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 14px 24px;
                background: rgba(17, 16, 20, 0.85);
                backdrop-filter: blur(8px);
            ",

            div {
                class: "logo",
                style: "font-weight: 700; letter-spacing: 0.2em; color: {PALETTE.accent};",
                "OUR PARTY"
            }

            div {
                style: "display: flex; gap: 8px;",
                for control in controls {
                    button {
                        key: "{control.label}",
                        class: "upload-btn",
                        disabled: disabled,
                        style: "
                            padding: 8px 16px;
                            border: none;
                            border-radius: 999px;
                            font-weight: 600;
                            cursor: pointer;
                            opacity: {opacity};
                            background: {PALETTE.accent};
                            color: {PALETTE.bg_primary};
                        ",
                        onclick: {
                            let options = control.options.clone();
                            move |_| {
                                let Some(client) = (state.client)() else {
                                    return;
                                };
                                let trigger = DialogTrigger::new(options.clone());
                                spawn(capture_and_upload(trigger, client, state.view));
                            }
                        },
                        if uploading {
                            "Uploading..."
                        } else {
                            "+ {control.label}"
                        }
                    }
                }
            }
        }
    }
}
