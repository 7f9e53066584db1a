//! Colors for the album window

/// Fixed dark palette used by inline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_tile: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub overlay: &'static str,
}

pub const PALETTE: Palette = Palette {
    bg_primary: "#111014",
    bg_tile: "#1d1b22",
    text_primary: "#f5f2ea",
    text_muted: "#9c98a6",
    accent: "#d9b26f",
    overlay: "rgba(0, 0, 0, 0.92)",
};
