//! Capture trigger capability.
//!
//! A capture trigger produces the file(s) to upload: a native file chooser,
//! a camera-biased chooser, or a multi-file picker standing in for the hosted
//! upload widget. The rest of the album depends only on `CaptureTrigger`.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Extensions offered by the file-selection filter. A hint, not enforced.
pub const ACCEPTED_EXTENSIONS: [&str; 11] = [
    "jpg", "jpeg", "png", "gif", "webp", "heic", "heif", "mp4", "mov", "m4v", "webm",
];

/// Where a picker may draw files from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureSource {
    /// Files already on the device.
    Local,
    /// The device camera (rear camera on phones, pictures folder on desktop).
    Camera,
}

/// Picker behaviour for one capture trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerOptions {
    pub sources: Vec<CaptureSource>,
    pub multiple: bool,
    pub max_file_size: Option<u64>,
}

impl PickerOptions {
    /// Multi-file picker with local and camera sources and a size limit.
    #[must_use]
    pub fn hosted_widget(max_file_size: u64) -> Self {
        Self {
            sources: vec![CaptureSource::Local, CaptureSource::Camera],
            multiple: true,
            max_file_size: Some(max_file_size),
        }
    }

    /// Single hidden file input.
    #[must_use]
    pub fn single_input() -> Self {
        Self {
            sources: vec![CaptureSource::Local],
            multiple: false,
            max_file_size: None,
        }
    }

    /// Single file input hinting the camera.
    #[must_use]
    pub fn camera_input() -> Self {
        Self {
            sources: vec![CaptureSource::Camera],
            multiple: false,
            max_file_size: None,
        }
    }

    #[must_use]
    pub fn prefers_camera(&self) -> bool {
        self.sources == [CaptureSource::Camera]
    }
}

/// A file chosen by the user, read into memory for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Wrap picked bytes, inferring the MIME type from the name when the
    /// platform did not supply a useful one.
    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Self {
        let file_name = file_name.into();
        let content_type = infer_mime_type(content_type, &file_name);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                Error::InvalidInput(format!("{} has no usable file name", path.display()))
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, None, bytes))
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::try_from(self.bytes.len()).unwrap_or(u64::MAX)
    }
}

/// Result of one trigger invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    Selected(Vec<SelectedFile>),
    Cancelled,
}

/// Capability to ask the user for files to upload.
#[allow(async_fn_in_trait)]
pub trait CaptureTrigger {
    /// Picker behaviour this trigger was configured with.
    fn options(&self) -> &PickerOptions;

    /// Ask for a selection. Cancelling the picker is not an error.
    async fn request_files(&self) -> Result<CaptureOutcome>;
}

/// Apply the picker's multiplicity and size rules to a raw selection.
pub fn admit_selection(options: &PickerOptions, mut files: Vec<SelectedFile>) -> CaptureOutcome {
    if let Some(limit) = options.max_file_size {
        files.retain(|file| {
            let fits = file.size() <= limit;
            if !fits {
                tracing::warn!(
                    file = %file.file_name,
                    size = file.size(),
                    limit,
                    "Skipping file larger than the picker limit"
                );
            }
            fits
        });
    }

    if !options.multiple && files.len() > 1 {
        tracing::warn!(
            selected = files.len(),
            "Picker accepts one file per invocation; keeping the first"
        );
        files.truncate(1);
    }

    if files.is_empty() {
        CaptureOutcome::Cancelled
    } else {
        CaptureOutcome::Selected(files)
    }
}

/// Trigger backed by paths given up front (command line arguments).
#[derive(Clone, Debug)]
pub struct PathTrigger {
    paths: Vec<PathBuf>,
    options: PickerOptions,
}

impl PathTrigger {
    pub fn new(paths: Vec<PathBuf>, options: PickerOptions) -> Self {
        Self { paths, options }
    }
}

impl CaptureTrigger for PathTrigger {
    fn options(&self) -> &PickerOptions {
        &self.options
    }

    async fn request_files(&self) -> Result<CaptureOutcome> {
        let mut files = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            files.push(SelectedFile::from_path(path).await?);
        }
        Ok(admit_selection(&self.options, files))
    }
}

/// Pick a MIME type for an upload part.
///
/// Prefers a concrete platform-supplied type, falling back to the file
/// extension and finally `application/octet-stream`.
pub fn infer_mime_type(content_type: Option<&str>, file_name: &str) -> String {
    if let Some(content_type) = content_type {
        let trimmed = content_type.trim();
        if !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("application/octet-stream") {
            return trimmed.to_string();
        }
    }

    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
