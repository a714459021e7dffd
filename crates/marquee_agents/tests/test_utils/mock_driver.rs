//! Scripted generative backend.

use async_trait::async_trait;
use marquee_core::{GenerateRequest, GenerateResponse, Output};
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};
use marquee_interface::{ImageGeneration, JsonMode, MarqueeDriver};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Backend that answers from queues of canned responses.
///
/// Free-text and JSON-mode calls pop from separate queues; an empty queue is an
/// API error. Every request is recorded.
#[derive(Debug, Default)]
pub struct MockDriver {
    outputs: Mutex<VecDeque<Output>>,
    json: Mutex<VecDeque<Value>>,
    image: Vec<u8>,
    requests: Mutex<Vec<GenerateRequest>>,
    image_prompts: Mutex<Vec<String>>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            image: vec![0xFF, 0xD8, 0xFF, 0xE0],
            ..Self::default()
        }
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_output(Output::Text(text.into()))
    }

    /// Queue a free-text call answer of any output kind.
    pub fn with_output(self, output: Output) -> Self {
        self.outputs.lock().unwrap().push_back(output);
        self
    }

    pub fn with_json(self, value: Value) -> Self {
        self.json.lock().unwrap().push_back(value);
        self
    }

    pub fn image_bytes(&self) -> &[u8] {
        &self.image
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().unwrap().clone()
    }

    fn exhausted(what: &str) -> marquee_error::MarqueeError {
        GenerationError::new(GenerationErrorKind::ApiRequest(format!(
            "no scripted {} response",
            what
        )))
        .into()
    }
}

#[async_trait]
impl MarqueeDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> MarqueeResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        let output = self
            .outputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Self::exhausted("text"))?;
        Ok(GenerateResponse::new(vec![output]))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[async_trait]
impl JsonMode for MockDriver {
    async fn generate_json(&self, req: &GenerateRequest, _schema: &Value) -> MarqueeResult<Value> {
        self.requests.lock().unwrap().push(req.clone());
        self.json
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Self::exhausted("json"))
    }
}

#[async_trait]
impl ImageGeneration for MockDriver {
    async fn generate_image(&self, prompt: &str) -> MarqueeResult<Vec<u8>> {
        self.image_prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.image.clone())
    }
}
