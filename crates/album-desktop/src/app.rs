//! Main application component

use std::sync::Arc;

use album_core::config::{ENV_CLOUD_NAME, ENV_TAG, ENV_UPLOAD_PRESET};
use album_core::delivery::DeliveryUrls;
use album_core::gallery::ViewState;
use album_core::media::{MediaApiClient, MediaStore};
use dioxus::prelude::*;

use crate::bootstrap_config::{load_bootstrap_config, runtime_env};
use crate::services::CaptureMode;
use crate::state::AppState;
use crate::theme::PALETTE;
use crate::views::Home;

/// Album wiring resolved once at startup.
#[derive(Clone)]
struct Startup {
    client: Option<Arc<MediaApiClient>>,
    urls: Option<DeliveryUrls>,
    capture_mode: CaptureMode,
    error: Option<String>,
}

fn resolve_startup() -> Startup {
    let bootstrap = load_bootstrap_config();
    let capture_mode = bootstrap.capture_mode(runtime_env);

    let config = match bootstrap.album_config(runtime_env) {
        Ok(Some(config)) => config,
        Ok(None) => {
            return Startup {
                client: None,
                urls: None,
                capture_mode,
                error: Some(format!(
                    "Album is not configured. Set {ENV_CLOUD_NAME}, {ENV_UPLOAD_PRESET} and {ENV_TAG}."
                )),
            };
        }
        Err(error) => {
            return Startup {
                client: None,
                urls: None,
                capture_mode,
                error: Some(error.to_string()),
            };
        }
    };

    let urls = DeliveryUrls::new(&config);
    match MediaApiClient::new(config) {
        Ok(client) => Startup {
            client: Some(Arc::new(client)),
            urls: Some(urls),
            capture_mode,
            error: None,
        },
        Err(error) => Startup {
            client: None,
            urls: Some(urls),
            capture_mode,
            error: Some(error.to_string()),
        },
    }
}

/// Root application component
#[component]
pub fn App() -> Element {
    let startup = use_hook(resolve_startup);

    let mut view = use_signal(ViewState::new);
    let client = use_signal(|| startup.client.clone());
    let urls = use_signal(|| startup.urls.clone());
    let capture_mode = use_signal(|| startup.capture_mode);
    let config_error = use_signal(|| startup.error.clone());

    // Initial listing on mount
    use_future(move || async move {
        let Some(client) = client() else {
            tracing::warn!("Album not configured; skipping listing");
            view.write().apply_listing(Vec::new());
            return;
        };
        let items = client.list_by_tag(&client.config().tag).await;
        view.write().apply_listing(items);
    });

    use_context_provider(|| AppState {
        view,
        client,
        urls,
        capture_mode,
        config_error,
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {PALETTE.bg_primary};
                color: {PALETTE.text_primary};
            ",
            Home {}
        }
    }
}
