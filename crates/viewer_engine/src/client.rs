use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::json;
use viewer_logging::{viewer_debug, viewer_info};

use crate::response::interpret_response;
use crate::{FailureKind, ScrapeError, ScrapePayload};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const API_BASE_ENV: &str = "API_BASE_URL";
pub const TIMEOUT_ENV: &str = "SCRAPER_TIMEOUT_SECS";
const SCRAPE_PATH: &str = "/scrape";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Origin of the scraping backend, without the `/scrape` path.
    pub api_base: String,
    pub connect_timeout: Duration,
    /// Overall request limit. Scrapes can legitimately take long, so none by default.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_response_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ClientSettings {
    /// Builds settings from variables resolved through `lookup`.
    ///
    /// Blank or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(base) = lookup(API_BASE_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            settings.api_base = base;
        }
        if let Some(secs) = lookup(TIMEOUT_ENV).and_then(|value| value.trim().parse::<u64>().ok()) {
            settings.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        settings
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn scrape_endpoint(&self) -> String {
        format!("{}{SCRAPE_PATH}", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
pub trait ScrapeClient: Send + Sync {
    /// Asks the backend to scrape `url`. Exactly one attempt is made.
    async fn scrape(&self, url: &str) -> Result<ScrapePayload, ScrapeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScrapeClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestScrapeClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ScrapeError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ScrapeError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<String, ScrapeError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait::async_trait]
impl ScrapeClient for ReqwestScrapeClient {
    async fn scrape(&self, url: &str) -> Result<ScrapePayload, ScrapeError> {
        let endpoint = reqwest::Url::parse(&self.settings.scrape_endpoint()).map_err(|err| {
            ScrapeError::new(
                FailureKind::InvalidEndpoint,
                format!("Invalid backend address {}: {err}", self.settings.api_base),
            )
        })?;
        let body = json!({ "url": url }).to_string();

        viewer_info!("POST {} url={}", endpoint, url);
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let text = self.read_body(response).await?;
        viewer_debug!("Backend replied status={} body_len={}", status, text.len());
        interpret_response(status, &text)
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> ScrapeError {
    ScrapeError::new(
        FailureKind::TooLarge { max_bytes, actual },
        format!("Backend response exceeds {max_bytes} bytes"),
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ScrapeError {
    if err.is_timeout() {
        return ScrapeError::new(FailureKind::Timeout, format!("Request timed out: {err}"));
    }
    ScrapeError::new(FailureKind::Network, format!("Network error: {err}"))
}
