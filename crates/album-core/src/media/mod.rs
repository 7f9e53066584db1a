//! Hosted media service client.
//!
//! Two remote calls back the whole album: a tag listing (read) and an
//! unsigned upload (write). Listing failures are soft: callers get an empty
//! album and a log line, since a brand-new album legitimately has no media.
//! Upload failures are returned so the front-end can tell the user.

use reqwest::{multipart, Client, Request};
use serde::{Deserialize, Serialize};

use crate::capture::SelectedFile;
use crate::config::AlbumConfig;
use crate::models::{Listing, MediaItem};
use crate::util::{compact_text, unix_millis_now};
use crate::{Error, Result};

/// Read/write operations the album needs from a media store.
#[allow(async_fn_in_trait)]
pub trait MediaStore {
    /// List the items carrying `tag`. Never fails: errors yield an empty list.
    async fn list_by_tag(&self, tag: &str) -> Vec<MediaItem>;

    /// Upload one file labelled with `tag`.
    async fn upload(&self, file: &SelectedFile, tag: &str) -> Result<UploadReceipt>;
}

/// Summary of the upload response. The body is otherwise opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(skip)]
    pub raw: serde_json::Value,
}

impl UploadReceipt {
    fn from_body(body: &str) -> Self {
        let raw = serde_json::from_str::<serde_json::Value>(body).unwrap_or_default();
        let mut receipt = serde_json::from_value::<Self>(raw.clone()).unwrap_or_default();
        receipt.raw = raw;
        receipt
    }
}

/// HTTP client for the hosted media service.
#[derive(Debug, Clone)]
pub struct MediaApiClient {
    config: AlbumConfig,
    client: Client,
}

impl MediaApiClient {
    pub fn new(config: AlbumConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|error| Error::Config(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self { config, client })
    }

    #[must_use]
    pub const fn config(&self) -> &AlbumConfig {
        &self.config
    }

    /// Build the listing request for `tag` with a fresh cache buster.
    pub fn build_listing_request(&self, tag: &str, cache_buster: i64) -> Result<Request> {
        let url = self.config.listing_url_for(tag, cache_buster);
        self.client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .build()
            .map_err(Error::Http)
    }

    /// Build the multipart upload request for one file.
    pub fn build_upload_request(&self, file: &SelectedFile, tag: &str) -> Result<Request> {
        let file_part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(Error::Http)?;

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("upload_preset", self.config.upload_preset.clone())
            .text("tags", tag.to_string());

        self.client
            .post(self.config.upload_url())
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .build()
            .map_err(Error::Http)
    }

    /// Strict listing: surfaces network and status failures as `ListFailure`.
    pub async fn fetch_listing(&self, tag: &str) -> Result<Vec<MediaItem>> {
        let request = self.build_listing_request(tag, unix_millis_now())?;
        tracing::debug!(url = %request.url(), "Requesting album listing");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|error| Error::ListFailure(format!("request failed: {error}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ListFailure(format!(
                "HTTP {status}: {}",
                compact_text(&body)
            )));
        }

        let listing = response
            .json::<Listing>()
            .await
            .map_err(|error| Error::ListFailure(format!("invalid listing payload: {error}")))?;
        Ok(listing.resources)
    }
}

impl MediaStore for MediaApiClient {
    async fn list_by_tag(&self, tag: &str) -> Vec<MediaItem> {
        match self.fetch_listing(tag).await {
            Ok(items) => {
                tracing::info!(tag, count = items.len(), "Loaded album listing");
                items
            }
            Err(error) => {
                tracing::warn!(tag, "Waiting for first uploads or network error: {}", error);
                Vec::new()
            }
        }
    }

    async fn upload(&self, file: &SelectedFile, tag: &str) -> Result<UploadReceipt> {
        let request = self.build_upload_request(file, tag)?;
        tracing::debug!(
            file = %file.file_name,
            size = file.size(),
            content_type = %file.content_type,
            "Uploading to media service"
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|error| Error::UploadFailure(format!("request failed: {error}")))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(Error::UploadFailure(format!(
                "HTTP {}: {}",
                status.as_u16(),
                compact_text(&body)
            )));
        }

        let receipt = UploadReceipt::from_body(&body);
        tracing::info!(
            file = %file.file_name,
            public_id = receipt.public_id.as_deref().unwrap_or("-"),
            "Upload accepted"
        );
        tracing::debug!(response = %receipt.raw, "Upload response");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::task::JoinHandle;

    use super::*;

    fn client() -> MediaApiClient {
        MediaApiClient::new(AlbumConfig::new("drbzyhoss", "vsco_guest", "album_quinces")).unwrap()
    }

    /// Serve one canned response; the handle yields the raw request.
    async fn spawn_one_shot_server(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let address = listener.local_addr().expect("local address");
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return String::new();
            };
            let request = read_request(&mut socket).await;
            let _ = socket.write_all(response.as_bytes()).await;
            request
        });

        (format!("http://{address}"), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut request = Vec::new();
        let mut chunk = [0_u8; 4096];
        while !request_complete(&request) {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(read) => request.extend_from_slice(&chunk[..read]),
            }
        }
        String::from_utf8_lossy(&request).into_owned()
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.trim().eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);
        request.len() >= header_end + 4 + content_length
    }

    fn client_for(base_url: &str) -> MediaApiClient {
        let mut config = AlbumConfig::new("drbzyhoss", "vsco_guest", "album_quinces");
        config.delivery_base_url = base_url.to_string();
        config.api_base_url = base_url.to_string();
        MediaApiClient::new(config).unwrap()
    }

    fn photo() -> SelectedFile {
        SelectedFile::new("cake.jpg", None, vec![1, 2, 3])
    }

    #[test]
    fn listing_request_shape_is_correct() {
        let request = client()
            .build_listing_request("album_quinces", 42)
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://res.cloudinary.com/drbzyhoss/image/list/album_quinces.json?v=42"
        );
        assert_eq!(
            request
                .headers()
                .get(reqwest::header::ACCEPT)
                .unwrap()
                .to_str()
                .unwrap(),
            "application/json"
        );
    }

    #[test]
    fn listing_request_honours_other_tags() {
        let request = client().build_listing_request("other", 7).unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://res.cloudinary.com/drbzyhoss/image/list/other.json?v=7"
        );
    }

    #[test]
    fn upload_request_is_multipart_post() {
        let file = SelectedFile::new("party.jpg", None, vec![1, 2, 3]);
        let request = client().build_upload_request(&file, "album_quinces").unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://api.cloudinary.com/v1_1/drbzyhoss/auto/upload"
        );
        let content_type = request
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
    }

    #[test]
    fn upload_request_rejects_invalid_mime() {
        let file = SelectedFile {
            file_name: "x.jpg".to_string(),
            content_type: "not a mime".to_string(),
            bytes: vec![0],
        };
        assert!(matches!(
            client().build_upload_request(&file, "album_quinces"),
            Err(Error::Http(_))
        ));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unreachable_listing_soft_fails_to_empty_album() {
        let mut config = AlbumConfig::new("drbzyhoss", "vsco_guest", "album_quinces");
        config.delivery_base_url = "http://127.0.0.1:9".to_string();
        let client = MediaApiClient::new(config).unwrap();

        assert!(matches!(
            client.fetch_listing("album_quinces").await,
            Err(Error::ListFailure(_))
        ));

        let mut session = crate::session::AlbumSession::new(client.config().clone(), client);
        let phase = session.load().await;
        assert_eq!(phase, crate::gallery::GalleryPhase::Empty);
        assert!(!session.state().is_loading);
        assert!(session.state().items.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn listing_returns_items_in_response_order() {
        let (base_url, server) = spawn_one_shot_server(
            "200 OK",
            r#"{"resources":[{"public_id":"a","format":"jpg"},{"public_id":"b","format":"mp4"}]}"#,
        )
        .await;

        let items = client_for(&base_url).list_by_tag("album_quinces").await;

        assert_eq!(
            items,
            vec![MediaItem::new("a", "jpg"), MediaItem::new("b", "mp4")]
        );
        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /drbzyhoss/image/list/album_quinces.json?v="),
            "{request}"
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn missing_listing_soft_fails_to_empty() {
        let (base_url, _server) =
            spawn_one_shot_server("404 Not Found", r#"{"error":"not found"}"#).await;
        assert!(client_for(&base_url).list_by_tag("album_quinces").await.is_empty());

        let (base_url, _server) =
            spawn_one_shot_server("404 Not Found", r#"{"error":"not found"}"#).await;
        let error = client_for(&base_url)
            .fetch_listing("album_quinces")
            .await
            .unwrap_err();
        let Error::ListFailure(message) = error else {
            panic!("expected list failure, got {error:?}");
        };
        assert!(message.starts_with("HTTP 404: "), "{message}");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejected_upload_is_upload_failure() {
        let (base_url, server) = spawn_one_shot_server(
            "400 Bad Request",
            r#"{"error":{"message":"bad preset"}}"#,
        )
        .await;

        let error = client_for(&base_url)
            .upload(&photo(), "album_quinces")
            .await
            .unwrap_err();

        let Error::UploadFailure(message) = error else {
            panic!("expected upload failure, got {error:?}");
        };
        assert_eq!(message, r#"HTTP 400: {"error":{"message":"bad preset"}}"#);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1_1/drbzyhoss/auto/upload"), "{request}");
        assert!(request.contains("name=\"upload_preset\""));
        assert!(request.contains("vsco_guest"));
        assert!(request.contains("name=\"tags\""));
        assert!(request.contains("filename=\"cake.jpg\""));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn accepted_upload_returns_receipt() {
        let (base_url, _server) = spawn_one_shot_server(
            "200 OK",
            r#"{"public_id":"xyz","format":"jpg","resource_type":"image"}"#,
        )
        .await;

        let receipt = client_for(&base_url)
            .upload(&photo(), "album_quinces")
            .await
            .unwrap();

        assert_eq!(receipt.public_id.as_deref(), Some("xyz"));
        assert_eq!(receipt.resource_type.as_deref(), Some("image"));
    }

    #[test]
    fn upload_receipt_summarises_response() {
        let receipt = UploadReceipt::from_body(
            r#"{"public_id":"abc123","format":"jpg","resource_type":"image","bytes":1024}"#,
        );
        assert_eq!(receipt.public_id.as_deref(), Some("abc123"));
        assert_eq!(receipt.format.as_deref(), Some("jpg"));
        assert_eq!(receipt.resource_type.as_deref(), Some("image"));
        assert_eq!(receipt.raw["bytes"], 1024);
    }

    #[test]
    fn upload_receipt_tolerates_opaque_body() {
        let receipt = UploadReceipt::from_body("ok");
        assert_eq!(receipt.public_id, None);
        assert_eq!(receipt.raw, serde_json::Value::Null);
    }
}
