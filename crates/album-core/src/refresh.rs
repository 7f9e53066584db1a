//! Listing refresh after an upload.
//!
//! The media service processes uploads asynchronously and pushes no
//! completion signal, so the album waits a fixed delay and lists once.
//! Swapping this for a webhook or poll loop only touches this module.

use std::time::Duration;

use crate::config::DEFAULT_REFRESH_DELAY_MS;
use crate::media::MediaStore;
use crate::models::MediaItem;

pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(DEFAULT_REFRESH_DELAY_MS);

/// Wait `delay`, then perform exactly one listing call.
pub async fn refresh_after_upload<S: MediaStore>(
    store: &S,
    tag: &str,
    delay: Duration,
) -> Vec<MediaItem> {
    tracing::debug!(delay_ms = delay.as_millis(), "Scheduling listing refresh");
    tokio::time::sleep(delay).await;
    store.list_by_tag(tag).await
}
