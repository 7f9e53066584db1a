//! Derived delivery URLs for media items.
//!
//! The media service transforms on the fly from URL path hints, so display,
//! full-size, and download URLs are pure string templates over the item's
//! identity and format.

use crate::config::AlbumConfig;
use crate::models::{MediaItem, MediaKind};

const GRID_IMAGE_TRANSFORM: &str = "w_600,q_auto,f_auto";
const GRID_VIDEO_TRANSFORM: &str = "q_auto,vc_auto";
const FULL_IMAGE_TRANSFORM: &str = "q_auto,f_auto";
const FULL_VIDEO_TRANSFORM: &str = "q_auto";
const DOWNLOAD_TRANSFORM: &str = "fl_attachment";

/// URL builder bound to one account's media base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryUrls {
    media_base: String,
}

impl DeliveryUrls {
    #[must_use]
    pub fn new(config: &AlbumConfig) -> Self {
        Self {
            media_base: config.media_base(),
        }
    }

    /// Grid thumbnail: width-capped for images, codec-negotiated for videos.
    #[must_use]
    pub fn thumbnail(&self, item: &MediaItem) -> String {
        match item.kind() {
            MediaKind::Image => self.build("image", GRID_IMAGE_TRANSFORM, item),
            MediaKind::Video => self.build("video", GRID_VIDEO_TRANSFORM, item),
        }
    }

    /// Lightbox source with no width constraint.
    #[must_use]
    pub fn full(&self, item: &MediaItem) -> String {
        match item.kind() {
            MediaKind::Image => self.build("image", FULL_IMAGE_TRANSFORM, item),
            MediaKind::Video => self.build("video", FULL_VIDEO_TRANSFORM, item),
        }
    }

    /// Attachment-disposition link. Always on the image delivery path.
    #[must_use]
    pub fn download(&self, item: &MediaItem) -> String {
        self.build("image", DOWNLOAD_TRANSFORM, item)
    }

    fn build(&self, resource: &str, transform: &str, item: &MediaItem) -> String {
        format!(
            "{}/{resource}/upload/{transform}/{}",
            self.media_base,
            item.file_path()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn urls() -> DeliveryUrls {
        DeliveryUrls::new(&AlbumConfig::new("drbzyhoss", "vsco_guest", "album_quinces"))
    }

    #[test]
    fn image_urls_match_delivery_scheme() {
        let item = MediaItem::new("a", "jpg");
        let urls = urls();

        assert_eq!(
            urls.thumbnail(&item),
            "https://res.cloudinary.com/drbzyhoss/image/upload/w_600,q_auto,f_auto/a.jpg"
        );
        assert_eq!(
            urls.full(&item),
            "https://res.cloudinary.com/drbzyhoss/image/upload/q_auto,f_auto/a.jpg"
        );
        assert_eq!(
            urls.download(&item),
            "https://res.cloudinary.com/drbzyhoss/image/upload/fl_attachment/a.jpg"
        );
    }

    #[test]
    fn video_urls_match_delivery_scheme() {
        let item = MediaItem::new("b", "mp4");
        let urls = urls();

        assert_eq!(
            urls.thumbnail(&item),
            "https://res.cloudinary.com/drbzyhoss/video/upload/q_auto,vc_auto/b.mp4"
        );
        assert_eq!(
            urls.full(&item),
            "https://res.cloudinary.com/drbzyhoss/video/upload/q_auto/b.mp4"
        );
        assert_eq!(
            urls.download(&item),
            "https://res.cloudinary.com/drbzyhoss/image/upload/fl_attachment/b.mp4"
        );
    }

    #[test]
    fn custom_delivery_host_is_respected() {
        let mut config = AlbumConfig::new("demo", "preset", "tag");
        config.delivery_base_url = "http://localhost:9000".to_string();
        let urls = DeliveryUrls::new(&config);

        assert_eq!(
            urls.thumbnail(&MediaItem::new("x", "png")),
            "http://localhost:9000/demo/image/upload/w_600,q_auto,f_auto/x.png"
        );
    }
}
