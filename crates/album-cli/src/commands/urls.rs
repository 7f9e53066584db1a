use album_core::delivery::DeliveryUrls;
use album_core::{AlbumConfig, MediaItem};

use crate::commands::common::media_to_list_item;
use crate::error::CliError;

pub fn run_urls(
    config: &AlbumConfig,
    public_id: &str,
    format: &str,
    as_json: bool,
) -> Result<(), CliError> {
    let urls = DeliveryUrls::new(config);
    let item = media_to_list_item(&MediaItem::new(public_id.trim(), format.trim()), &urls);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("kind:     {}", item.kind);
        println!("display:  {}", item.display_url);
        println!("full:     {}", item.full_url);
        println!("download: {}", item.download_url);
    }

    Ok(())
}
