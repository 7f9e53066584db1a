//! album-core - Core library for the event album
//!
//! This crate contains the configuration, media model, hosted media service
//! client, and gallery view state shared by the album front-ends (desktop, CLI).

pub mod capture;
pub mod config;
pub mod delivery;
pub mod error;
pub mod gallery;
pub mod media;
pub mod models;
pub mod refresh;
pub mod session;
pub mod util;

pub use config::AlbumConfig;
pub use error::{Error, Result};
pub use models::{MediaItem, MediaKind};
