//! UI Components
//!
//! Header, grid, tiles and lightbox for the album window.

mod empty_state;
mod gallery_grid;
mod header;
mod lightbox;
mod media_tile;

pub use empty_state::EmptyState;
pub use gallery_grid::GalleryGrid;
pub use header::Header;
pub use lightbox::Lightbox;
pub use media_tile::MediaTile;
