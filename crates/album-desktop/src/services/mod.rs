//! Application services
//!
//! Native file pickers and the capture-to-upload flow.

mod capture;
mod upload;

pub use capture::{CaptureButton, CaptureMode, DialogTrigger, ENV_CAPTURE_MODE};
pub use upload::capture_and_upload;
