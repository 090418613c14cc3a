//! Remote content fetching
//!
//! The registry document and every hook/helper source file go through the
//! [`Transport`] trait. [`HttpTransport`] is the production implementation;
//! it also serves `file://` URLs so a registry can be mirrored locally.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{Result, registry as registry_error};

/// Default timeout for HTTP requests (30 seconds)
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("hookpull/", env!("CARGO_PKG_VERSION"));

/// Fetches documents and raw file contents by URL
pub trait Transport {
    /// Fetch raw bytes at `url`
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;

    /// Fetch and decode a JSON document at `url`
    fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        let bytes = self.fetch_bytes(url)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| registry_error::transport(url, format!("invalid JSON: {e}")))
    }
}

/// HTTP client wrapper, no retries
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                registry_error::transport("", format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(path) = local_path(url) {
            debug!(url, "reading local file");
            return std::fs::read(&path).map_err(|e| registry_error::transport(url, e));
        }

        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| registry_error::transport(url, e))?;

        if !response.status().is_success() {
            return Err(registry_error::transport(
                url,
                format!("HTTP {}", response.status()),
            ));
        }

        let bytes = response
            .bytes()
            .map_err(|e| registry_error::transport(url, format!("Failed to read response: {e}")))?;
        Ok(bytes.to_vec())
    }
}

/// Map a `file://` URL to a local path
fn local_path(url: &str) -> Option<PathBuf> {
    if !url.starts_with("file://") {
        return None;
    }
    reqwest::Url::parse(url).ok()?.to_file_path().ok()
}
