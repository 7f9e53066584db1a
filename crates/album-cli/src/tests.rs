use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;

use album_core::capture::{PathTrigger, PickerOptions, SelectedFile};
use album_core::config::{ENV_CLOUD_NAME, ENV_TAG, ENV_UPLOAD_PRESET};
use album_core::delivery::DeliveryUrls;
use album_core::media::{MediaStore, UploadReceipt};
use album_core::session::AlbumSession;
use album_core::{AlbumConfig, MediaItem};
use pretty_assertions::assert_eq;

use crate::cli::CompletionShell;
use crate::commands::common::{
    format_media_lines, media_to_list_item, resolve_config_with, ConfigOverrides,
};
use crate::commands::completions::{completion_script, run_completions};
use crate::commands::upload::upload_with_trigger;
use crate::error::CliError;

#[derive(Default)]
struct FakeStore {
    list_calls: Cell<usize>,
    reject: Option<&'static str>,
}

impl MediaStore for FakeStore {
    async fn list_by_tag(&self, _tag: &str) -> Vec<MediaItem> {
        self.list_calls.set(self.list_calls.get() + 1);
        vec![MediaItem::new("cake", "jpg")]
    }

    async fn upload(&self, file: &SelectedFile, _tag: &str) -> album_core::Result<UploadReceipt> {
        if self.reject == Some(file.file_name.as_str()) {
            return Err(album_core::Error::UploadFailure("HTTP 413: too large".to_string()));
        }
        Ok(UploadReceipt {
            public_id: Some(format!("id-{}", file.file_name)),
            ..UploadReceipt::default()
        })
    }
}

fn config() -> AlbumConfig {
    AlbumConfig::new("drbzyhoss", "vsco_guest", "album_quinces")
}

fn write_files(dir: &tempfile::TempDir, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.path().join(name);
            std::fs::write(&path, b"media").unwrap();
            path
        })
        .collect()
}

#[test]
fn resolve_config_prefers_flags_over_environment() {
    let env = HashMap::from([
        (ENV_CLOUD_NAME, "env-cloud"),
        (ENV_UPLOAD_PRESET, "env-preset"),
        (ENV_TAG, "env-tag"),
    ]);
    let overrides = ConfigOverrides {
        tag: Some("flag-tag".to_string()),
        ..ConfigOverrides::default()
    };

    let config = resolve_config_with(&overrides, |key| {
        env.get(key).map(|value| (*value).to_string())
    })
    .unwrap();

    assert_eq!(config.cloud_name, "env-cloud");
    assert_eq!(config.upload_preset, "env-preset");
    assert_eq!(config.tag, "flag-tag");
}

#[test]
fn resolve_config_requires_identifiers() {
    let error = resolve_config_with(&ConfigOverrides::default(), |_| None).unwrap_err();
    assert!(matches!(error, CliError::Core(album_core::Error::Config(_))));
}

#[test]
fn format_media_lines_shows_empty_prompt() {
    let urls = DeliveryUrls::new(&config());
    assert_eq!(
        format_media_lines(&[], &urls),
        vec!["No memories yet. Be the first to share!".to_string()]
    );
}

#[test]
fn format_media_lines_lists_kind_and_thumbnail() {
    let urls = DeliveryUrls::new(&config());
    let lines = format_media_lines(
        &[MediaItem::new("a", "jpg"), MediaItem::new("b", "mov")],
        &urls,
    );

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("image"));
    assert!(lines[0].ends_with("/image/upload/w_600,q_auto,f_auto/a.jpg"));
    assert!(lines[1].starts_with("video"));
    assert!(lines[1].ends_with("/video/upload/q_auto,vc_auto/b.mov"));
}

#[test]
fn media_list_item_carries_all_urls() {
    let urls = DeliveryUrls::new(&config());
    let item = media_to_list_item(&MediaItem::new("b", "mp4"), &urls);

    assert_eq!(item.kind, "video");
    assert_eq!(
        item.full_url,
        "https://res.cloudinary.com/drbzyhoss/video/upload/q_auto/b.mp4"
    );
    assert_eq!(
        item.download_url,
        "https://res.cloudinary.com/drbzyhoss/image/upload/fl_attachment/b.mp4"
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn upload_refreshes_once_after_batch() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_files(&dir, &["one.jpg", "two.mp4"]);
    let trigger = PathTrigger::new(paths, PickerOptions::hosted_widget(1_000));
    let mut session = AlbumSession::new(config(), FakeStore::default());

    let report = upload_with_trigger(&mut session, &trigger, false)
        .await
        .unwrap();

    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.refreshed_count, Some(1));
    assert_eq!(session.store().list_calls.get(), 1);
    assert_eq!(
        report.lines(),
        vec![
            "uploaded one.jpg -> id-one.jpg".to_string(),
            "uploaded two.mp4 -> id-two.mp4".to_string(),
            "Album now has 1 item(s)".to_string(),
        ]
    );
    assert!(report.into_result().is_ok());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn upload_without_refresh_skips_listing() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_files(&dir, &["one.jpg"]);
    let trigger = PathTrigger::new(paths, PickerOptions::single_input());
    let mut session = AlbumSession::new(config(), FakeStore::default());

    let report = upload_with_trigger(&mut session, &trigger, true)
        .await
        .unwrap();

    assert_eq!(report.refreshed_count, None);
    assert_eq!(session.store().list_calls.get(), 0);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failed_upload_is_reported_and_not_refreshed() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_files(&dir, &["huge.mov"]);
    let trigger = PathTrigger::new(paths, PickerOptions::single_input());
    let store = FakeStore {
        reject: Some("huge.mov"),
        ..FakeStore::default()
    };
    let mut session = AlbumSession::new(config(), store);

    let report = upload_with_trigger(&mut session, &trigger, false)
        .await
        .unwrap();

    assert_eq!(report.failed(), 1);
    assert_eq!(report.refreshed_count, None);
    assert_eq!(session.store().list_calls.get(), 0);
    assert!(report.lines()[0].contains("too large"));
    assert!(matches!(
        report.into_result(),
        Err(CliError::UploadsFailed { failed: 1, total: 1 })
    ));
}

#[tokio::test(flavor = "current_thread")]
async fn oversized_selection_is_nothing_selected() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_files(&dir, &["big.jpg"]);
    let trigger = PathTrigger::new(paths, PickerOptions::hosted_widget(1));
    let mut session = AlbumSession::new(config(), FakeStore::default());

    let error = upload_with_trigger(&mut session, &trigger, false)
        .await
        .unwrap_err();
    assert!(matches!(error, CliError::NothingSelected));
}

#[test]
fn run_completions_writes_bash_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("album.bash");

    run_completions(CompletionShell::Bash, Some(&output)).unwrap();

    let script = std::fs::read_to_string(&output).unwrap();
    assert!(script.contains("album"));
    assert!(script.contains("upload"));
}

#[test]
fn completion_scripts_cover_every_subcommand() {
    for shell in [CompletionShell::Bash, CompletionShell::Zsh, CompletionShell::Fish] {
        let script = String::from_utf8(completion_script(shell)).unwrap();
        for subcommand in ["list", "upload", "urls", "completions"] {
            assert!(script.contains(subcommand), "{shell:?} missing {subcommand}");
        }
    }
}
