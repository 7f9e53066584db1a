//! Data models for the album

mod media_item;

pub use media_item::{Listing, MediaItem, MediaKind, VIDEO_FORMATS};
