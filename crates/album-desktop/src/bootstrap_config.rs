//! Album configuration baked in at build time, layered under the runtime
//! environment.

use album_core::config::{
    ENV_API_BASE_URL, ENV_CLOUD_NAME, ENV_DELIVERY_BASE_URL, ENV_MAX_FILE_SIZE,
    ENV_REFRESH_DELAY_MS, ENV_TAG, ENV_UPLOAD_PRESET,
};
use album_core::util::normalize_text_option;
use album_core::AlbumConfig;
use serde::{Deserialize, Serialize};

use crate::services::{CaptureMode, ENV_CAPTURE_MODE};

/// Build-provisioned album identifiers embedded into desktop binaries.
///
/// Cloud name, unsigned preset and tag are public values; no secrets belong
/// here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumBootstrapConfig {
    #[serde(default)]
    pub cloud_name: Option<String>,
    #[serde(default)]
    pub upload_preset: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub delivery_base_url: Option<String>,
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub refresh_delay_ms: Option<String>,
    #[serde(default)]
    pub max_file_size: Option<String>,
    #[serde(default)]
    pub capture_mode: Option<String>,
}

/// Loads the generated bootstrap JSON from `OUT_DIR`.
///
/// A parse failure logs a warning and falls back to the runtime environment
/// alone.
pub fn load_bootstrap_config() -> AlbumBootstrapConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/album-bootstrap.json"));
    serde_json::from_str(raw).unwrap_or_else(|error| {
        tracing::warn!("Failed to parse album bootstrap config: {}", error);
        AlbumBootstrapConfig::default()
    })
}

pub fn runtime_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl AlbumBootstrapConfig {
    fn baked(&self, key: &str) -> Option<String> {
        let value = match key {
            ENV_CLOUD_NAME => &self.cloud_name,
            ENV_UPLOAD_PRESET => &self.upload_preset,
            ENV_TAG => &self.tag,
            ENV_DELIVERY_BASE_URL => &self.delivery_base_url,
            ENV_API_BASE_URL => &self.api_base_url,
            ENV_REFRESH_DELAY_MS => &self.refresh_delay_ms,
            ENV_MAX_FILE_SIZE => &self.max_file_size,
            ENV_CAPTURE_MODE => &self.capture_mode,
            _ => return None,
        };
        value.clone()
    }

    /// Runtime value when set and non-blank, otherwise the baked value.
    pub fn lookup(&self, key: &str, runtime: impl Fn(&str) -> Option<String>) -> Option<String> {
        normalize_text_option(runtime(key)).or_else(|| normalize_text_option(self.baked(key)))
    }

    pub fn album_config(
        &self,
        runtime: impl Fn(&str) -> Option<String>,
    ) -> album_core::Result<Option<AlbumConfig>> {
        AlbumConfig::from_lookup(|key| self.lookup(key, &runtime))
    }

    pub fn capture_mode(&self, runtime: impl Fn(&str) -> Option<String>) -> CaptureMode {
        CaptureMode::parse(self.lookup(ENV_CAPTURE_MODE, runtime).as_deref())
    }
}
