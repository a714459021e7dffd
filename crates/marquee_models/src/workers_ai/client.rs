//! Workers AI REST client.

use super::{
    conversion,
    dto::{Envelope, ImageResult, TextResult, WorkersAiImageRequest},
};
use crate::credentials::{CLOUDFLARE_API_BASE, CloudflareCredentials};
use async_trait::async_trait;
use marquee_core::{GenerateRequest, GenerateResponse};
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};
use marquee_interface::{ImageGeneration, JsonMode, MarqueeDriver};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, instrument};

/// Default free-text model.
pub const DEFAULT_TEXT_MODEL: &str = "@cf/meta/llama-4-scout-17b-16e-instruct";
/// Default model for schema-constrained output.
pub const DEFAULT_STRUCTURED_MODEL: &str = "@cf/meta/llama-3.3-70b-instruct-fp8-fast";
/// Default image model.
pub const DEFAULT_IMAGE_MODEL: &str = "@cf/black-forest-labs/flux-1-schnell";

/// Cloudflare Workers AI client.
///
/// One client covers all three capabilities, each with its own default model.
/// A request's `model` overrides the default for that call.
#[derive(Debug, Clone)]
pub struct WorkersAiClient {
    client: Client,
    credentials: CloudflareCredentials,
    base_url: String,
    text_model: String,
    structured_model: String,
    image_model: String,
}

impl WorkersAiClient {
    /// Creates a client from `CLOUDFLARE_ACCOUNT_ID` and `CLOUDFLARE_API_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredentials` if either variable is unset.
    #[instrument]
    pub fn new() -> MarqueeResult<Self> {
        Ok(Self::with_credentials(CloudflareCredentials::from_env()?))
    }

    /// Creates a client with explicit credentials.
    pub fn with_credentials(credentials: CloudflareCredentials) -> Self {
        debug!(account = credentials.account_id(), "Created Workers AI client");
        Self {
            client: Client::new(),
            credentials,
            base_url: CLOUDFLARE_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            structured_model: DEFAULT_STRUCTURED_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the free-text model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Override the structured-output model.
    pub fn with_structured_model(mut self, model: impl Into<String>) -> Self {
        self.structured_model = model.into();
        self
    }

    /// Override the image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    fn run_url(&self, model: &str) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url.trim_end_matches('/'),
            self.credentials.account_id(),
            model
        )
    }

    /// POST `body` to a model and decode the envelope payload.
    async fn run<B, T>(&self, model: &str, body: &B) -> MarqueeResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = self.run_url(model);
        debug!(url = %url, "Sending request to Workers AI");

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.credentials.bearer())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::ApiRequest(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(GenerationError::new(GenerationErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let envelope: Envelope<T> = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GenerationError::new(GenerationErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        conversion::unwrap_envelope(envelope, model)
    }
}

#[async_trait]
impl MarqueeDriver for WorkersAiClient {
    #[instrument(skip(self, req), fields(messages = req.messages().len()))]
    async fn generate(&self, req: &GenerateRequest) -> MarqueeResult<GenerateResponse> {
        let model = req.model().as_deref().unwrap_or(&self.text_model);
        let body = conversion::to_text_request(req, None)?;
        let result: TextResult = self.run(model, &body).await?;
        conversion::from_text_result(result, model)
    }

    fn provider_name(&self) -> &'static str {
        "workers-ai"
    }

    fn model_name(&self) -> &str {
        &self.text_model
    }
}

#[async_trait]
impl JsonMode for WorkersAiClient {
    #[instrument(skip(self, req, schema), fields(messages = req.messages().len()))]
    async fn generate_json(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> MarqueeResult<serde_json::Value> {
        let model = req.model().as_deref().unwrap_or(&self.structured_model);
        let body = conversion::to_text_request(req, Some(schema))?;
        let result: TextResult = self.run(model, &body).await?;
        let response = conversion::from_text_result(result, model)?;
        conversion::structured_value(&response)
    }
}

#[async_trait]
impl ImageGeneration for WorkersAiClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate_image(&self, prompt: &str) -> MarqueeResult<Vec<u8>> {
        let body = WorkersAiImageRequest {
            prompt: prompt.to_string(),
        };
        let result: ImageResult = self.run(&self.image_model, &body).await?;
        let bytes = conversion::decode_image(result, &self.image_model)?;
        debug!(bytes = bytes.len(), "Decoded generated image");
        Ok(bytes)
    }
}
