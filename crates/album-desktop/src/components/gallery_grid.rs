//! Gallery grid component

use album_core::gallery::GalleryPhase;
use dioxus::prelude::*;

use super::{EmptyState, MediaTile};
use crate::state::AppState;

/// Phase to render. An unconfigured album shows only the configuration
/// error, never the empty-album prompt.
fn visible_phase(phase: GalleryPhase, config_error: Option<&str>) -> Option<GalleryPhase> {
    config_error.is_none().then_some(phase)
}

/// Loading placeholder, empty prompt, or the tile grid in listing order.
#[component]
pub fn GalleryGrid() -> Element {
    let state = use_context::<AppState>();
    let config_error = (state.config_error)();
    let Some(phase) = visible_phase(state.view.read().phase(), config_error.as_deref()) else {
        return rsx! {};
    };

    match phase {
        GalleryPhase::Loading => rsx! {
            div {
                style: "text-align: center; margin-top: 40px; opacity: 0.5;",
                "Loading..."
            }
        },
        GalleryPhase::Empty => rsx! {
            EmptyState {}
        },
        GalleryPhase::Populated => {
            let tiles = match (state.urls)() {
                Some(urls) => state.view.read().tiles(&urls),
                None => Vec::new(),
            };
            rsx! {
                div {
                    class: "masonry-grid",
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                        gap: 10px;
                        padding: 0 16px 40px;
                    ",
                    for tile in tiles {
                        MediaTile { key: "{tile.public_id}", tile }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn configuration_error_hides_empty_prompt() {
        assert_eq!(
            visible_phase(GalleryPhase::Empty, Some("Album is not configured.")),
            None
        );
        assert_eq!(
            visible_phase(GalleryPhase::Loading, Some("Album is not configured.")),
            None
        );
    }

    #[test]
    fn configured_album_renders_every_phase() {
        for phase in [
            GalleryPhase::Loading,
            GalleryPhase::Empty,
            GalleryPhase::Populated,
        ] {
            assert_eq!(visible_phase(phase, None), Some(phase));
        }
    }
}
