//! Workers AI REST data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One chat message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkersAiMessage {
    /// "system", "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

/// `response_format` block requesting JSON-schema output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Always "json_schema"
    #[serde(rename = "type")]
    pub format_type: String,
    /// The JSON schema the response must satisfy
    pub json_schema: serde_json::Value,
}

/// Chat completion request body.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct WorkersAiTextRequest {
    /// Conversation messages
    messages: Vec<WorkersAiMessage>,
    /// Output token ceiling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Structured output constraint
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

impl WorkersAiTextRequest {
    /// Creates a new builder.
    pub fn builder() -> WorkersAiTextRequestBuilder {
        WorkersAiTextRequestBuilder::default()
    }
}

/// Image generation request body.
#[derive(Debug, Clone, Serialize)]
pub struct WorkersAiImageRequest {
    /// Text prompt to render
    pub prompt: String,
}

/// Error detail inside an API envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    /// Cloudflare error code
    #[serde(default)]
    pub code: i64,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

/// Standard Cloudflare API envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Payload on success
    pub result: Option<T>,
    /// Whether the call succeeded
    #[serde(default)]
    pub success: bool,
    /// Errors reported by the API
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

/// Text model result: a string, or already-parsed JSON for schema calls.
#[derive(Debug, Clone, Deserialize)]
pub struct TextResult {
    /// Model output
    pub response: Option<serde_json::Value>,
}

/// Image model result.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResult {
    /// Base64-encoded JPEG
    pub image: Option<String>,
}
