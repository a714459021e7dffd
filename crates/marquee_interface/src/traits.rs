//! Trait definitions for generative backends and their capabilities.

use async_trait::async_trait;
use marquee_core::{GenerateRequest, GenerateResponse};
use marquee_error::MarqueeResult;

/// Core trait every generative text backend implements.
///
/// Free-text calls are best effort: the response is whatever the model wrote.
#[async_trait]
pub trait MarqueeDriver: Send + Sync {
    /// Generate model output for a list of role-tagged messages.
    async fn generate(&self, req: &GenerateRequest) -> MarqueeResult<GenerateResponse>;

    /// Provider name (e.g., "workers-ai").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when the request names none.
    fn model_name(&self) -> &str;
}

/// Backends that can constrain output to a JSON schema.
///
/// A response either conforms to the schema or the whole call fails.
#[async_trait]
pub trait JsonMode: MarqueeDriver {
    /// Generate output conforming to `schema`.
    async fn generate_json(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> MarqueeResult<serde_json::Value>;
}

/// Backends that turn a text prompt into image bytes.
#[async_trait]
pub trait ImageGeneration: Send + Sync {
    /// Render `prompt` and return the decoded image bytes.
    async fn generate_image(&self, prompt: &str) -> MarqueeResult<Vec<u8>>;

    /// MIME type of the returned bytes.
    fn image_mime_type(&self) -> &'static str {
        "image/jpeg"
    }
}

/// Something that can render a web page as a markdown digest.
#[async_trait]
pub trait MarkdownSource: Send + Sync {
    /// Fetch `url` and return it as markdown.
    async fn fetch_markdown(&self, url: &str) -> MarqueeResult<String>;
}

/// Read-only view of the research cache.
///
/// Reads are point-in-time snapshots; both lists are empty until the first
/// gather completes.
pub trait ResearchReader: Send + Sync {
    /// Currently cached trend descriptions.
    fn popular_trends(&self) -> Vec<String>;

    /// Currently cached actor names, ordered by surname.
    fn popular_actors(&self) -> Vec<String>;
}
