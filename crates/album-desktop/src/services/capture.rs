//! Native capture triggers backed by `rfd` file dialogs.

use album_core::capture::{
    admit_selection, CaptureOutcome, CaptureTrigger, PickerOptions, SelectedFile,
    ACCEPTED_EXTENSIONS,
};
use album_core::Result;
use rfd::AsyncFileDialog;

pub const ENV_CAPTURE_MODE: &str = "ALBUM_CAPTURE_MODE";

/// Which upload controls the header offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureMode {
    /// One multi-file picker with a size limit.
    #[default]
    Widget,
    /// One single-file picker.
    Single,
    /// Separate gallery and camera pickers.
    Dual,
}

/// One header control and the picker it opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureButton {
    pub label: &'static str,
    pub options: PickerOptions,
}

impl CaptureMode {
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
            return Self::default();
        };
        match value.to_ascii_lowercase().as_str() {
            "widget" => Self::Widget,
            "single" => Self::Single,
            "dual" => Self::Dual,
            other => {
                tracing::warn!(mode = other, "Unknown capture mode, using widget");
                Self::default()
            }
        }
    }

    pub fn buttons(self, max_file_size: u64) -> Vec<CaptureButton> {
        match self {
            Self::Widget => vec![CaptureButton {
                label: "Upload",
                options: PickerOptions::hosted_widget(max_file_size),
            }],
            Self::Single => vec![CaptureButton {
                label: "Upload",
                options: PickerOptions::single_input(),
            }],
            Self::Dual => vec![
                CaptureButton {
                    label: "Gallery",
                    options: PickerOptions::single_input(),
                },
                CaptureButton {
                    label: "Camera",
                    options: PickerOptions::camera_input(),
                },
            ],
        }
    }
}

/// File dialog trigger. The camera-biased variant opens in the pictures
/// folder, where tethered or synced camera shots land.
#[derive(Clone, Debug)]
pub struct DialogTrigger {
    options: PickerOptions,
}

impl DialogTrigger {
    pub const fn new(options: PickerOptions) -> Self {
        Self { options }
    }

    fn dialog(&self) -> AsyncFileDialog {
        let title = if self.options.multiple {
            "Choose photos and videos"
        } else {
            "Choose a photo or video"
        };
        let dialog = AsyncFileDialog::new()
            .set_title(title)
            .add_filter("Photos and videos", &ACCEPTED_EXTENSIONS[..]);

        if self.options.prefers_camera() {
            if let Some(pictures) = dirs::picture_dir() {
                return dialog.set_directory(pictures);
            }
        }
        dialog
    }
}

impl CaptureTrigger for DialogTrigger {
    fn options(&self) -> &PickerOptions {
        &self.options
    }

    async fn request_files(&self) -> Result<CaptureOutcome> {
        let dialog = self.dialog();
        let handles = if self.options.multiple {
            dialog.pick_files().await.unwrap_or_default()
        } else {
            dialog.pick_file().await.into_iter().collect()
        };

        let mut files = Vec::with_capacity(handles.len());
        for handle in handles {
            let file_name = handle.file_name();
            if file_name.trim().is_empty() {
                tracing::warn!("Skipping selected file with an empty name");
                continue;
            }
            let bytes = handle.read().await;
            files.push(SelectedFile::new(file_name, None, bytes));
        }

        Ok(admit_selection(&self.options, files))
    }
}
