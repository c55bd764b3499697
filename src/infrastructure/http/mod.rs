// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the gallery API.
//!
//! Endpoints (relative to the configured base URL):
//!
//! - `GET api/gallery/categories`
//! - `GET api/gallery/images?category=<key>` (`all` for the unfiltered set)
//!
//! Image bytes are downloaded from the absolute URLs found in `src`.

use std::time::Duration;

use futures_util::FutureExt;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::application::port::{ApiFuture, ApiResult, GalleryApi};
use crate::domain::gallery::{Category, CategoryFilter, GalleryImage};
use crate::error::NetworkError;

const CATEGORIES_PATH: &str = "api/gallery/categories";
const IMAGES_PATH: &str = "api/gallery/images";
const CATEGORY_PARAM: &str = "category";

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("CommunityGallery/", env!("CARGO_PKG_VERSION"));

/// [`GalleryApi`] implementation backed by `reqwest`.
///
/// Cloning is cheap: the underlying client shares its connection pool.
#[derive(Debug, Clone)]
pub struct HttpGalleryApi {
    client: Client,
    base: Url,
}

impl HttpGalleryApi {
    /// Creates a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL, or [`NetworkError::Transport`] if the TLS backend cannot
    /// be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let base = parse_base(base_url)?;
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;

        Ok(Self { client, base })
    }

    /// URL of the category listing.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUrl`] if the path cannot be joined.
    pub fn categories_url(&self) -> ApiResult<Url> {
        self.base
            .join(CATEGORIES_PATH)
            .map_err(|e| NetworkError::InvalidUrl(e.to_string()))
    }

    /// URL of the image listing for `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUrl`] if the path cannot be joined.
    pub fn images_url(&self, filter: &CategoryFilter) -> ApiResult<Url> {
        let mut url = self
            .base
            .join(IMAGES_PATH)
            .map_err(|e| NetworkError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair(CATEGORY_PARAM, filter.query_value());
        Ok(url)
    }
}

impl GalleryApi for HttpGalleryApi {
    fn fetch_categories(&self) -> ApiFuture<Vec<Category>> {
        let client = self.client.clone();
        let url = self.categories_url();
        async move { get_json(&client, url?).await }.boxed()
    }

    fn fetch_images(&self, filter: &CategoryFilter) -> ApiFuture<Vec<GalleryImage>> {
        let client = self.client.clone();
        let url = self.images_url(filter);
        async move { get_json(&client, url?).await }.boxed()
    }

    fn fetch_image_bytes(&self, url: &str) -> ApiFuture<Vec<u8>> {
        let client = self.client.clone();
        // Relative `src` values resolve against the API base.
        let url = self
            .base
            .join(url)
            .map_err(|e| NetworkError::InvalidUrl(e.to_string()));
        async move {
            let response = send(&client, url?).await?;
            let bytes = response.bytes().await.map_err(map_reqwest_error)?;
            Ok(bytes.to_vec())
        }
        .boxed()
    }
}

async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> ApiResult<T> {
    let response = send(client, url).await?;
    response.json::<T>().await.map_err(map_reqwest_error)
}

async fn send(client: &Client, url: Url) -> ApiResult<reqwest::Response> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(map_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(NetworkError::Status(status.as_u16()));
    }
    Ok(response)
}

fn map_reqwest_error(error: reqwest::Error) -> NetworkError {
    if error.is_timeout() {
        NetworkError::Timeout
    } else if error.is_decode() {
        NetworkError::Decode(error.to_string())
    } else if let Some(status) = error.status() {
        NetworkError::Status(status.as_u16())
    } else {
        NetworkError::Transport(error.to_string())
    }
}

/// Parses the base URL and makes sure its path ends with `/` so relative
/// endpoint paths are appended instead of replacing the last segment.
fn parse_base(base_url: &str) -> ApiResult<Url> {
    let mut url =
        Url::parse(base_url.trim()).map_err(|_| NetworkError::InvalidUrl(base_url.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(NetworkError::InvalidUrl(base_url.to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn api(base: &str) -> HttpGalleryApi {
        HttpGalleryApi::new(base, Duration::from_secs(5)).expect("valid base URL")
    }

    /// Reads one request head from `stream`.
    async fn read_request(stream: &mut TcpStream) {
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut buf).await.expect("read request");
            if read == 0 {
                break;
            }
            head.extend_from_slice(&buf[..read]);
        }
    }

    /// Serves a single connection with `status` and `body`; returns the base
    /// URL to reach it.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            let _ = stream.shutdown().await;
        });
        format!("http://{addr}")
    }

    #[test]
    fn categories_url_is_joined_to_base() {
        let api = api("http://localhost:5000");
        assert_eq!(
            api.categories_url().expect("url").as_str(),
            "http://localhost:5000/api/gallery/categories"
        );
    }

    #[test]
    fn base_path_prefix_is_preserved() {
        let api = api("https://example.org/community");
        assert_eq!(
            api.categories_url().expect("url").as_str(),
            "https://example.org/community/api/gallery/categories"
        );
    }

    #[test]
    fn images_url_always_sends_category() {
        let api = api("http://localhost:5000/");
        assert_eq!(
            api.images_url(&CategoryFilter::All).expect("url").as_str(),
            "http://localhost:5000/api/gallery/images?category=all"
        );
        assert_eq!(
            api.images_url(&CategoryFilter::from_key("nature"))
                .expect("url")
                .as_str(),
            "http://localhost:5000/api/gallery/images?category=nature"
        );
    }

    #[test]
    fn category_value_is_percent_encoded() {
        let api = api("http://localhost:5000");
        let url = api
            .images_url(&CategoryFilter::from_key("art & craft"))
            .expect("url");
        assert_eq!(url.query(), Some("category=art+%26+craft"));
    }

    #[test]
    fn invalid_base_urls_are_rejected() {
        for base in ["not a url", "ftp://example.org", ""] {
            assert!(matches!(
                HttpGalleryApi::new(base, Duration::from_secs(1)),
                Err(NetworkError::InvalidUrl(_))
            ));
        }
    }

    #[tokio::test]
    async fn server_error_maps_to_status() {
        let base = serve_once("503 Service Unavailable", "").await;
        let result = api(&base).fetch_images(&CategoryFilter::All).await;
        assert_eq!(result, Err(NetworkError::Status(503)));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_decode() {
        let base = serve_once("200 OK", "{\"images\": oops").await;
        let result = api(&base).fetch_categories().await;
        assert!(matches!(result, Err(NetworkError::Decode(_))));
    }

    #[tokio::test]
    async fn image_list_keeps_server_order() {
        let body = r#"[
            {"id": 9, "src": "/img/9.jpg", "title": "Dusk", "category_key": "nature"},
            {"id": 2, "src": "/img/2.jpg", "title": "Parade", "category_key": "events"},
            {"id": 5, "src": "/img/5.jpg", "title": "Lake", "category_key": "nature"}
        ]"#;
        let base = serve_once("200 OK", body).await;
        let images = api(&base)
            .fetch_images(&CategoryFilter::All)
            .await
            .expect("valid image list");

        let ids: Vec<i64> = images.iter().map(|image| image.id.0).collect();
        assert_eq!(ids, [9, 2, 5]);
        assert_eq!(images[1].category_key.as_str(), "events");
    }

    #[tokio::test]
    async fn silent_server_maps_to_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            read_request(&mut stream).await;
            // Hold the connection without answering
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(stream);
        });

        let api = HttpGalleryApi::new(&format!("http://{addr}"), Duration::from_millis(200))
            .expect("valid base URL");
        let result = api.fetch_categories().await;
        assert_eq!(result, Err(NetworkError::Timeout));
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("CommunityGallery/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
