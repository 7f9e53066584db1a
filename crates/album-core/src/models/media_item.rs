//! Media item model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Format tags rendered as video; everything else is treated as an image.
pub const VIDEO_FORMATS: [&str; 2] = ["mp4", "mov"];

/// Rendering class of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a delivery format tag.
    #[must_use]
    pub fn from_format(format: &str) -> Self {
        if VIDEO_FORMATS.contains(&format) {
            Self::Video
        } else {
            Self::Image
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// One uploaded photo or video as reported by the hosted media service.
///
/// Identity is `public_id`. Other listing metadata is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaItem {
    /// Identity assigned by the media service.
    pub public_id: String,
    /// Delivery format extension (`jpg`, `mp4`, ...).
    #[serde(default)]
    pub format: String,
}

impl MediaItem {
    pub fn new(public_id: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            format: format.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_format(&self.format)
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind() == MediaKind::Video
    }

    /// `public_id.format` path segment used by every delivery URL.
    #[must_use]
    pub fn file_path(&self) -> String {
        format!("{}.{}", self.public_id, self.format)
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_path())
    }
}

/// Tag listing payload: `{ "resources": [...] }`.
///
/// Entries that do not parse as a `MediaItem` are dropped one by one so the
/// rest of the album still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "skip_malformed_items")]
    pub resources: Vec<MediaItem>,
}

fn skip_malformed_items<'de, D>(deserializer: D) -> Result<Vec<MediaItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<MediaItem>(entry) {
            Ok(item) => Some(item),
            Err(error) => {
                tracing::warn!("Skipping malformed listing entry: {}", error);
                None
            }
        })
        .collect())
}
