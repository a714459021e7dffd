//! Request and response types for the generative service.

use crate::{Message, Output};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A generation request: role-tagged messages plus optional limits.
///
/// # Examples
///
/// ```
/// use marquee_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::system("Return only the number."), Message::user("Heat")])
///     .max_tokens(Some(300))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 2);
/// assert_eq!(*request.max_tokens(), Some(300));
/// ```
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Model identifier overriding the client default
    #[builder(default)]
    model: Option<String>,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Build a request from messages only.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            max_tokens: None,
            model: None,
        }
    }

    /// Replace the output token ceiling.
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Replace the model override.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use marquee_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse::new(vec![Output::Text("4".to_string())]);
/// assert_eq!(response.text(), Some("4"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Wrap outputs in a response.
    pub fn new(outputs: Vec<Output>) -> Self {
        Self { outputs }
    }

    /// First text output, if any.
    pub fn text(&self) -> Option<&str> {
        self.outputs.iter().find_map(|output| match output {
            Output::Text(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
