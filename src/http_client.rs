//! HTTP retrieval of the remote document.
//!
//! One outbound GET per fetch, no retries, no timeouts: the build either
//! gets the whole document or fails. The status code is inspected before
//! the body is consumed; a non-success response is drained before the error
//! is raised so the connection is released instead of leaked.

use futures::StreamExt;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

/// Fetch pipeline errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The remote responded, but not with 200.
    #[error("remote responded with HTTP {status}")]
    HttpStatus { status: StatusCode },

    /// Transport-level failure before or during the response.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The body stream failed after a successful status.
    #[error("response body stream error: {0}")]
    Stream(#[source] reqwest::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// HTTP client for fetching remote documents as text.
pub struct RemoteClient {
    client: Client,
}

impl RemoteClient {
    /// Create a new client.
    ///
    /// No request timeout and no custom redirect policy: a build waits for
    /// the fetch to resolve or fail, and redirects are whatever the
    /// transport does out of the box.
    pub fn new() -> FetchResult<Self> {
        let client = Client::builder()
            .use_rustls_tls()
            .tcp_nodelay(true)
            .pool_max_idle_per_host(1)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Fetch `url` and return the full response body decoded as UTF-8.
    ///
    /// Exactly one outbound request per call. The body is read chunk by
    /// chunk in arrival order and decoded once the stream completes.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] when the transport fails before the status
    ///   line is available.
    /// - [`FetchError::HttpStatus`] when the remote answers with anything
    ///   other than 200; the body is fully drained before this returns.
    /// - [`FetchError::Stream`] when the body stream fails mid-read after a
    ///   successful status.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn fetch_text(&self, url: &str) -> FetchResult<String> {
        debug!("requesting remote document");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("transport failure: {e}");
            FetchError::Network(e)
        })?;

        let status = response.status();
        info!(status = %status, version = ?response.version(), "response received");

        let mut body = response.bytes_stream();

        if status != StatusCode::OK {
            // Consume whatever the server sent so the connection is
            // released before the error propagates.
            while let Some(chunk) = body.next().await {
                if chunk.is_err() {
                    break;
                }
            }
            error!(status = %status, "remote document fetch failed");
            return Err(FetchError::HttpStatus { status });
        }

        let mut raw = Vec::new();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| {
                error!(bytes = raw.len(), "body stream failed: {e}");
                FetchError::Stream(e)
            })?;
            raw.extend_from_slice(&chunk);
        }

        debug!(bytes = raw.len(), "document downloaded");
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}
