//! Cloudflare browser rendering client.

use crate::credentials::{CLOUDFLARE_API_BASE, CloudflareCredentials};
use async_trait::async_trait;
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};
use marquee_interface::MarkdownSource;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

#[derive(Debug, Serialize)]
struct MarkdownRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct MarkdownResponse {
    #[serde(default)]
    success: bool,
    result: Option<String>,
}

/// Renders a page in a headless browser and returns it as markdown.
#[derive(Debug, Clone)]
pub struct BrowserRenderingClient {
    client: Client,
    credentials: CloudflareCredentials,
    base_url: String,
}

impl BrowserRenderingClient {
    /// Creates a client from the Cloudflare environment variables.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` if either variable is unset.
    pub fn new() -> MarqueeResult<Self> {
        Ok(Self::with_credentials(CloudflareCredentials::from_env()?))
    }

    /// Creates a client with explicit credentials.
    pub fn with_credentials(credentials: CloudflareCredentials) -> Self {
        Self {
            client: Client::new(),
            credentials,
            base_url: CLOUDFLARE_API_BASE.to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl MarkdownSource for BrowserRenderingClient {
    #[instrument(skip(self))]
    async fn fetch_markdown(&self, url: &str) -> MarqueeResult<String> {
        let endpoint = format!(
            "{}/accounts/{}/browser-rendering/markdown",
            self.base_url.trim_end_matches('/'),
            self.credentials.account_id()
        );

        let response = self
            .client
            .post(&endpoint)
            .header("Authorization", self.credentials.bearer())
            .json(&MarkdownRequest { url })
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Browser rendering request failed");
                GenerationError::new(GenerationErrorKind::ApiRequest(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::new(GenerationErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let body: MarkdownResponse = response.json().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        match body.result {
            Some(markdown) if body.success && !markdown.trim().is_empty() => {
                debug!(chars = markdown.len(), "Fetched markdown digest");
                Ok(markdown)
            }
            _ => Err(
                GenerationError::new(GenerationErrorKind::EmptyResponse(url.to_string())).into(),
            ),
        }
    }
}
