pub mod common;
pub mod completions;
pub mod list;
pub mod upload;
pub mod urls;
