//! Generation steps backed by the generative service.

use super::prompts;
use crate::{GenerationSettings, MovieGenerator};
use async_trait::async_trait;
use marquee_core::{
    CastMember, GenerateRequest, GenerateResponse, Message, MovieState, Output, Review,
};
use marquee_error::{GenerationError, GenerationErrorKind, MarqueeResult};
use marquee_interface::{ImageGeneration, JsonMode, ResearchReader};
use marquee_storage::ObjectStore;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Gritty scale used whenever the model's answer is unusable.
pub const DEFAULT_GRITTY_SCALE: u8 = 3;

/// Public path prefix under which stored posters are served.
const POSTER_ROUTE: &str = "/images/posters";

/// Read a gritty scale from a free-text model answer.
///
/// Takes the leading integer (after optional whitespace and `+`) and keeps it
/// only if it lies in 1..=5. Anything else yields [`DEFAULT_GRITTY_SCALE`].
///
/// # Examples
///
/// ```
/// use marquee_agents::parse_gritty_scale;
///
/// assert_eq!(parse_gritty_scale("4"), 4);
/// assert_eq!(parse_gritty_scale(" 2/5\n"), 2);
/// assert_eq!(parse_gritty_scale("7"), 3);
/// assert_eq!(parse_gritty_scale("abc"), 3);
/// ```
pub fn parse_gritty_scale(response: &str) -> u8 {
    let trimmed = response.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<u8>() {
        Ok(scale) if (1..=5).contains(&scale) => scale,
        _ => DEFAULT_GRITTY_SCALE,
    }
}

/// Public path of a stored poster.
pub fn poster_path(key: &str) -> String {
    format!("{POSTER_ROUTE}/{key}")
}

/// The first output as text; JSON answers are rendered back to their source.
fn answer_text(response: &GenerateResponse) -> String {
    match response.outputs().first() {
        Some(Output::Text(text)) => text.clone(),
        Some(Output::Json(value)) => value.to_string(),
        None => String::new(),
    }
}

fn poster_key(movie: &MovieState) -> String {
    let prefix = movie.slug().as_deref().unwrap_or("unnamed");
    format!("{}/{}.jpg", prefix, uuid::Uuid::new_v4())
}

#[derive(Debug, Deserialize)]
struct RawReview {
    author: String,
    text: String,
    rating: f64,
}

impl TryFrom<RawReview> for Review {
    type Error = GenerationError;

    fn try_from(raw: RawReview) -> Result<Self, Self::Error> {
        if raw.rating.fract() != 0.0 || !(1.0..=5.0).contains(&raw.rating) {
            return Err(GenerationError::new(GenerationErrorKind::SchemaMismatch(
                format!("review rating {} is not a whole number from 1 to 5", raw.rating),
            )));
        }
        Ok(Review {
            author: raw.author,
            text: raw.text,
            rating: raw.rating as u8,
        })
    }
}

fn from_structured<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
    what: &str,
) -> MarqueeResult<T> {
    serde_json::from_value(value).map_err(|e| {
        GenerationError::new(GenerationErrorKind::SchemaMismatch(format!("{}: {}", what, e)))
            .into()
    })
}

/// [`MovieGenerator`] that prompts a generative backend.
///
/// Description and cast read the research cache; the poster step writes the
/// rendered image to the object store.
pub struct StepGenerator<D> {
    driver: Arc<D>,
    research: Arc<dyn ResearchReader>,
    store: Arc<dyn ObjectStore>,
    settings: GenerationSettings,
}

impl<D> StepGenerator<D>
where
    D: JsonMode + ImageGeneration + 'static,
{
    /// Build a generator with default token ceilings.
    pub fn new(
        driver: Arc<D>,
        research: Arc<dyn ResearchReader>,
        store: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            driver,
            research,
            store,
            settings: GenerationSettings::default(),
        }
    }

    /// Override the token ceilings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    fn request(messages: Vec<Message>, max_tokens: Option<u32>) -> GenerateRequest {
        GenerateRequest::new(messages).with_max_tokens(max_tokens)
    }

    /// Free-text answer, trimmed. A blank answer becomes an empty string.
    async fn text(&self, messages: Vec<Message>, max_tokens: Option<u32>) -> MarqueeResult<String> {
        let request = Self::request(messages, max_tokens);
        let response = self.driver.generate(&request).await?;
        Ok(answer_text(&response).trim().to_string())
    }
}

#[async_trait]
impl<D> MovieGenerator for StepGenerator<D>
where
    D: JsonMode + ImageGeneration + 'static,
{
    #[instrument(skip_all, fields(title = %movie.title()))]
    async fn gritty_scale(&self, movie: &MovieState) -> MarqueeResult<u8> {
        let request = Self::request(
            prompts::gritty_scale(movie),
            Some(*self.settings.gritty_max_tokens()),
        );
        let response = self.driver.generate(&request).await?;
        let answer = answer_text(&response);
        let scale = parse_gritty_scale(&answer);
        if scale == DEFAULT_GRITTY_SCALE && answer.trim() != "3" {
            warn!(answer = %answer, "Unusable gritty scale, using default");
        }
        Ok(scale)
    }

    #[instrument(skip_all, fields(title = %movie.title()))]
    async fn description(&self, movie: &MovieState) -> MarqueeResult<String> {
        let trends = self.research.popular_trends();
        debug!(trends = trends.len(), "Writing description");
        self.text(
            prompts::description(movie, &trends),
            Some(*self.settings.description_max_tokens()),
        )
        .await
    }

    #[instrument(skip_all, fields(title = %movie.title()))]
    async fn tagline(&self, movie: &MovieState) -> MarqueeResult<String> {
        self.text(prompts::tagline(movie), None).await
    }

    #[instrument(skip_all, fields(title = %movie.title()))]
    async fn cast(&self, movie: &MovieState) -> MarqueeResult<Vec<CastMember>> {
        let actors = self.research.popular_actors();
        debug!(actors = actors.len(), "Casting movie");
        let request = Self::request(
            prompts::cast(movie, &actors),
            Some(*self.settings.cast_max_tokens()),
        );
        let value = self
            .driver
            .generate_json(&request, &prompts::cast_schema())
            .await?;
        from_structured(value, "cast")
    }

    #[instrument(skip_all, fields(title = %movie.title()))]
    async fn poster(&self, movie: &MovieState) -> MarqueeResult<String> {
        let prompt = self.text(prompts::poster_prompt(movie), None).await?;
        debug!(prompt = %prompt, "Rendering poster");

        let bytes = self.driver.generate_image(&prompt).await?;
        let key = poster_key(movie);
        let reference = self
            .store
            .put(&key, &bytes, self.driver.image_mime_type())
            .await?;
        debug!(key = %reference.key(), size = reference.size_bytes(), "Stored poster");

        Ok(poster_path(reference.key()))
    }

    #[instrument(skip_all, fields(title = %movie.title()))]
    async fn reviews(&self, movie: &MovieState) -> MarqueeResult<Vec<Review>> {
        let request = Self::request(
            prompts::reviews(movie),
            Some(*self.settings.reviews_max_tokens()),
        );
        let value = self
            .driver
            .generate_json(&request, &prompts::reviews_schema())
            .await?;
        let raw: Vec<RawReview> = from_structured(value, "reviews")?;
        raw.into_iter()
            .map(|review| Review::try_from(review).map_err(Into::into))
            .collect()
    }
}
