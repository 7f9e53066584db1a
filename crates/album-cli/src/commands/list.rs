use album_core::media::{MediaApiClient, MediaStore};
use album_core::session::AlbumSession;
use album_core::AlbumConfig;

use crate::commands::common::{format_media_lines, media_to_list_item, MediaListItem};
use crate::error::CliError;

pub async fn run_list(config: AlbumConfig, as_json: bool) -> Result<(), CliError> {
    let client = MediaApiClient::new(config.clone())?;
    let mut session = AlbumSession::new(config, client);
    session.load().await;
    print_listing(&session, as_json)
}

pub fn print_listing<S: MediaStore>(
    session: &AlbumSession<S>,
    as_json: bool,
) -> Result<(), CliError> {
    let items = &session.state().items;

    if as_json {
        let json_items = items
            .iter()
            .map(|item| media_to_list_item(item, session.urls()))
            .collect::<Vec<MediaListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_media_lines(items, session.urls()) {
            println!("{line}");
        }
    }

    Ok(())
}
