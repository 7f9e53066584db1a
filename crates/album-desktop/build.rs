use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

const BAKED_KEYS: [&str; 8] = [
    "ALBUM_CLOUD_NAME",
    "ALBUM_UPLOAD_PRESET",
    "ALBUM_TAG",
    "ALBUM_DELIVERY_BASE_URL",
    "ALBUM_API_BASE_URL",
    "ALBUM_REFRESH_DELAY_MS",
    "ALBUM_MAX_FILE_SIZE",
    "ALBUM_CAPTURE_MODE",
];

#[derive(Debug, Default, Serialize)]
struct AlbumBootstrapConfig {
    cloud_name: Option<String>,
    upload_preset: Option<String>,
    tag: Option<String>,
    delivery_base_url: Option<String>,
    api_base_url: Option<String>,
    refresh_delay_ms: Option<String>,
    max_file_size: Option<String>,
    capture_mode: Option<String>,
}

fn main() {
    for key in BAKED_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }

    if let Err(error) = write_album_bootstrap_config() {
        println!("cargo:warning=failed to generate album bootstrap config: {error}");
    }
}

fn write_album_bootstrap_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let config = AlbumBootstrapConfig {
        cloud_name: env_var_trimmed("ALBUM_CLOUD_NAME"),
        upload_preset: env_var_trimmed("ALBUM_UPLOAD_PRESET"),
        tag: env_var_trimmed("ALBUM_TAG"),
        delivery_base_url: env_var_trimmed("ALBUM_DELIVERY_BASE_URL"),
        api_base_url: env_var_trimmed("ALBUM_API_BASE_URL"),
        refresh_delay_ms: env_var_trimmed("ALBUM_REFRESH_DELAY_MS"),
        max_file_size: env_var_trimmed("ALBUM_MAX_FILE_SIZE"),
        capture_mode: env_var_trimmed("ALBUM_CAPTURE_MODE"),
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("album-bootstrap.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    if candidate.exists() {
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
