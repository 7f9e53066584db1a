//! Album configuration shared by the desktop and CLI front-ends.
//!
//! Provides a single `AlbumConfig` struct built once at process start and
//! passed by reference to the media client and the views. It carries the
//! hosted media account, the unsigned upload preset, and the classification
//! tag that scopes every listing and upload to this album.

use std::time::Duration;

use crate::refresh::DEFAULT_REFRESH_DELAY;
use crate::util::{is_http_url, normalize_text_option};
use crate::{Error, Result};

pub const ENV_CLOUD_NAME: &str = "ALBUM_CLOUD_NAME";
pub const ENV_UPLOAD_PRESET: &str = "ALBUM_UPLOAD_PRESET";
pub const ENV_TAG: &str = "ALBUM_TAG";
pub const ENV_DELIVERY_BASE_URL: &str = "ALBUM_DELIVERY_BASE_URL";
pub const ENV_API_BASE_URL: &str = "ALBUM_API_BASE_URL";
pub const ENV_REFRESH_DELAY_MS: &str = "ALBUM_REFRESH_DELAY_MS";
pub const ENV_MAX_FILE_SIZE: &str = "ALBUM_MAX_FILE_SIZE";

pub const DEFAULT_DELIVERY_BASE_URL: &str = "https://res.cloudinary.com";
pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudinary.com";
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 2_500;
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_000_000;

/// Hosted media configuration for one album.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlbumConfig {
    /// Media service account identifier.
    pub cloud_name: String,
    /// Unsigned upload preset identifier.
    pub upload_preset: String,
    /// Classification tag attached to every upload and used for listing.
    pub tag: String,
    /// Host serving delivery URLs and tag listings.
    pub delivery_base_url: String,
    /// Host accepting uploads.
    pub api_base_url: String,
    /// Wait between a successful upload and the follow-up listing.
    pub refresh_delay: Duration,
    /// Per-file limit applied by the multi-file picker.
    pub max_file_size: u64,
}

impl AlbumConfig {
    /// Build a config for the given identifiers with default hosts and timings.
    pub fn new(
        cloud_name: impl Into<String>,
        upload_preset: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
            tag: tag.into(),
            delivery_base_url: DEFAULT_DELIVERY_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            refresh_delay: DEFAULT_REFRESH_DELAY,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Front-ends layer their own sources (CLI flags, build-time values) by
    /// composing lookups before calling this.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>> {
        let read = |key: &str| normalize_text_option(lookup(key));

        let cloud_name = read(ENV_CLOUD_NAME);
        let upload_preset = read(ENV_UPLOAD_PRESET);
        let tag = read(ENV_TAG);

        if cloud_name.is_none() && upload_preset.is_none() && tag.is_none() {
            return Ok(None);
        }

        let (Some(cloud_name), Some(upload_preset), Some(tag)) = (cloud_name, upload_preset, tag)
        else {
            let missing = [ENV_CLOUD_NAME, ENV_UPLOAD_PRESET, ENV_TAG]
                .into_iter()
                .filter(|key| read(*key).is_none())
                .collect::<Vec<_>>();
            return Err(Error::InvalidInput(format!(
                "Album configuration is incomplete. Missing: {}",
                missing.join(", ")
            )));
        };

        let mut config = Self::new(cloud_name, upload_preset, tag);
        if let Some(url) = read(ENV_DELIVERY_BASE_URL) {
            config.delivery_base_url = normalize_base_url(&url, ENV_DELIVERY_BASE_URL)?;
        }
        if let Some(url) = read(ENV_API_BASE_URL) {
            config.api_base_url = normalize_base_url(&url, ENV_API_BASE_URL)?;
        }
        if let Some(raw) = read(ENV_REFRESH_DELAY_MS) {
            config.refresh_delay = Duration::from_millis(parse_u64(&raw, ENV_REFRESH_DELAY_MS)?);
        }
        if let Some(raw) = read(ENV_MAX_FILE_SIZE) {
            config.max_file_size = parse_u64(&raw, ENV_MAX_FILE_SIZE)?;
        }

        Ok(Some(config))
    }

    /// Like `from_lookup`, but a missing configuration is an error.
    pub fn require(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Self::from_lookup(lookup)?.ok_or_else(|| {
            Error::Config(format!(
                "Album is not configured. Set {ENV_CLOUD_NAME}, {ENV_UPLOAD_PRESET} and {ENV_TAG}."
            ))
        })
    }

    /// Account-scoped base for delivery and listing URLs.
    #[must_use]
    pub fn media_base(&self) -> String {
        format!("{}/{}", self.delivery_base_url, self.cloud_name)
    }

    /// Album listing URL with the given cache-buster value.
    #[must_use]
    pub fn listing_url(&self, cache_buster: i64) -> String {
        self.listing_url_for(&self.tag, cache_buster)
    }

    /// Listing URL for an arbitrary tag on this account.
    #[must_use]
    pub fn listing_url_for(&self, tag: &str, cache_buster: i64) -> String {
        format!(
            "{}/image/list/{}.json?v={cache_buster}",
            self.media_base(),
            urlencoding::encode(tag)
        )
    }

    /// Upload endpoint accepting both images and videos.
    #[must_use]
    pub fn upload_url(&self) -> String {
        format!("{}/v1_1/{}/auto/upload", self.api_base_url, self.cloud_name)
    }
}

fn normalize_base_url(raw: &str, key: &str) -> Result<String> {
    let value = raw.trim().trim_end_matches('/');
    if is_http_url(value) {
        Ok(value.to_string())
    } else {
        Err(Error::InvalidInput(format!(
            "{key} must include http:// or https://"
        )))
    }
}

fn parse_u64(raw: &str, key: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|error| Error::InvalidInput(format!("{key} must be a whole number: {error}")))
}
