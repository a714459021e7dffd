//! Sources of research data.

use crate::ResearchSettings;
use async_trait::async_trait;
use marquee_core::{GenerateRequest, Message};
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};
use marquee_interface::{JsonMode, MarkdownSource};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

/// The three external steps of a research gather.
#[async_trait]
pub trait ResearchGatherer: Send + Sync {
    /// Fetch the digest the lists are extracted from.
    async fn fetch_digest(&self) -> MarqueeResult<String>;

    /// Extract trend descriptions from the digest.
    async fn extract_trends(&self, digest: &str) -> MarqueeResult<Vec<String>>;

    /// Extract actor names from the digest, in any order.
    async fn extract_actors(&self, digest: &str) -> MarqueeResult<Vec<String>>;
}

fn string_array_schema(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string", "description": description }
    })
}

fn string_list(value: Value, what: &str) -> MarqueeResult<Vec<String>> {
    serde_json::from_value(value).map_err(|e| {
        GenerationError::new(GenerationErrorKind::SchemaMismatch(format!("{}: {}", what, e)))
            .into()
    })
}

/// Gathers research by rendering a web page and asking a model to read it.
pub struct LlmResearchGatherer<D> {
    driver: Arc<D>,
    source: Arc<dyn MarkdownSource>,
    settings: ResearchSettings,
}

impl<D: JsonMode + 'static> LlmResearchGatherer<D> {
    /// Create a gatherer with default settings.
    pub fn new(driver: Arc<D>, source: Arc<dyn MarkdownSource>) -> Self {
        Self {
            driver,
            source,
            settings: ResearchSettings::default(),
        }
    }

    /// Override the source page and extraction limits.
    pub fn with_settings(mut self, settings: ResearchSettings) -> Self {
        self.settings = settings;
        self
    }
}

#[async_trait]
impl<D: JsonMode + 'static> ResearchGatherer for LlmResearchGatherer<D> {
    #[instrument(skip(self), fields(url = %self.settings.source_url()))]
    async fn fetch_digest(&self) -> MarqueeResult<String> {
        self.source.fetch_markdown(self.settings.source_url()).await
    }

    #[instrument(skip_all, fields(digest_len = digest.len()))]
    async fn extract_trends(&self, digest: &str) -> MarqueeResult<Vec<String>> {
        let request = GenerateRequest::new(vec![
            Message::system(
                "Your job is to find the current trends in movies.\n\
                 The user will give you a markdown summary of popular movies. Read the \
                 synopsis of each one and list the trends they share.",
            ),
            Message::user(digest),
        ])
        .with_max_tokens(Some(*self.settings.trends_max_tokens()));

        let value = self
            .driver
            .generate_json(&request, &string_array_schema("A trend seen in current films"))
            .await?;
        let trends = string_list(value, "trends")?;
        debug!(count = trends.len(), "Extracted trends");
        Ok(trends)
    }

    #[instrument(skip_all, fields(digest_len = digest.len()))]
    async fn extract_actors(&self, digest: &str) -> MarqueeResult<Vec<String>> {
        let request = GenerateRequest::new(vec![
            Message::system("Your job is to list the actors named in a summary of current movies."),
            Message::user(digest),
        ])
        .with_max_tokens(Some(*self.settings.actors_max_tokens()))
        .with_model(self.settings.actors_model().clone());

        let value = self
            .driver
            .generate_json(&request, &string_array_schema("Actor's name"))
            .await?;
        let actors = string_list(value, "actors")?;
        debug!(count = actors.len(), "Extracted actors");
        Ok(actors)
    }
}
