use std::env;

use album_core::config::{ENV_CLOUD_NAME, ENV_TAG, ENV_UPLOAD_PRESET};
use album_core::delivery::DeliveryUrls;
use album_core::{AlbumConfig, MediaItem};
use serde::Serialize;

use crate::error::CliError;

/// Identifier overrides passed on the command line.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
    pub tag: Option<String>,
}

impl ConfigOverrides {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            ENV_CLOUD_NAME => self.cloud_name.clone(),
            ENV_UPLOAD_PRESET => self.upload_preset.clone(),
            ENV_TAG => self.tag.clone(),
            _ => None,
        }
    }
}

/// Flags first, then the process environment.
pub fn resolve_config(overrides: &ConfigOverrides) -> Result<AlbumConfig, CliError> {
    resolve_config_with(overrides, |key| env::var(key).ok())
}

pub fn resolve_config_with(
    overrides: &ConfigOverrides,
    env_lookup: impl Fn(&str) -> Option<String>,
) -> Result<AlbumConfig, CliError> {
    Ok(AlbumConfig::require(|key| {
        overrides.get(key).or_else(|| env_lookup(key))
    })?)
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MediaListItem {
    pub public_id: String,
    pub format: String,
    pub kind: &'static str,
    pub display_url: String,
    pub full_url: String,
    pub download_url: String,
}

pub fn media_to_list_item(item: &MediaItem, urls: &DeliveryUrls) -> MediaListItem {
    MediaListItem {
        public_id: item.public_id.clone(),
        format: item.format.clone(),
        kind: item.kind().as_str(),
        display_url: urls.thumbnail(item),
        full_url: urls.full(item),
        download_url: urls.download(item),
    }
}

pub fn format_media_lines(items: &[MediaItem], urls: &DeliveryUrls) -> Vec<String> {
    if items.is_empty() {
        return vec!["No memories yet. Be the first to share!".to_string()];
    }

    items
        .iter()
        .map(|item| {
            format!(
                "{:<5}  {:<40}  {}",
                item.kind().as_str(),
                item.to_string(),
                urls.thumbnail(item)
            )
        })
        .collect()
}
