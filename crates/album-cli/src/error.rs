use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] album_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No files were selected for upload")]
    NothingSelected,
    #[error("{failed} of {total} uploads failed")]
    UploadsFailed { failed: usize, total: usize },
}
