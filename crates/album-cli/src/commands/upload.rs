use std::path::PathBuf;

use album_core::capture::{CaptureOutcome, CaptureTrigger, PathTrigger, PickerOptions};
use album_core::media::{MediaApiClient, MediaStore};
use album_core::session::{AlbumSession, UploadOutcome};
use album_core::AlbumConfig;

use crate::error::CliError;

pub async fn run_upload(
    config: AlbumConfig,
    paths: Vec<PathBuf>,
    single: bool,
    no_refresh: bool,
) -> Result<(), CliError> {
    let options = if single {
        PickerOptions::single_input()
    } else {
        PickerOptions::hosted_widget(config.max_file_size)
    };
    let trigger = PathTrigger::new(paths, options);
    let client = MediaApiClient::new(config.clone())?;
    let mut session = AlbumSession::new(config, client);

    let report = upload_with_trigger(&mut session, &trigger, no_refresh).await?;
    for line in report.lines() {
        println!("{line}");
    }
    report.into_result()
}

/// What happened to each admitted file.
#[derive(Debug, Default)]
pub struct UploadReport {
    pub entries: Vec<(String, UploadOutcome)>,
    pub refreshed_count: Option<usize>,
}

impl UploadReport {
    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| !outcome.is_uploaded())
            .count()
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = self
            .entries
            .iter()
            .map(|(file_name, outcome)| match outcome {
                UploadOutcome::Uploaded(receipt) => format!(
                    "uploaded {file_name} -> {}",
                    receipt.public_id.as_deref().unwrap_or("(pending)")
                ),
                UploadOutcome::Failed(notice) => {
                    format!("failed   {file_name}: {}", notice.replace('\n', " "))
                }
                UploadOutcome::Busy => format!("skipped  {file_name}: another upload in flight"),
            })
            .collect::<Vec<_>>();
        if let Some(count) = self.refreshed_count {
            lines.push(format!("Album now has {count} item(s)"));
        }
        lines
    }

    pub fn into_result(self) -> Result<(), CliError> {
        match self.failed() {
            0 => Ok(()),
            failed => Err(CliError::UploadsFailed {
                failed,
                total: self.entries.len(),
            }),
        }
    }
}

pub async fn upload_with_trigger<S: MediaStore, T: CaptureTrigger>(
    session: &mut AlbumSession<S>,
    trigger: &T,
    no_refresh: bool,
) -> Result<UploadReport, CliError> {
    let CaptureOutcome::Selected(files) = trigger.request_files().await? else {
        return Err(CliError::NothingSelected);
    };

    let mut report = UploadReport::default();
    if no_refresh {
        for file in &files {
            let outcome = session.upload(file).await;
            report.entries.push((file.file_name.clone(), outcome));
        }
    } else {
        let outcomes = session.upload_selection(&files).await;
        report.entries = files
            .iter()
            .map(|file| file.file_name.clone())
            .zip(outcomes)
            .collect();
        if report.failed() < report.entries.len() {
            report.refreshed_count = Some(session.state().items.len());
        }
    }

    Ok(report)
}
