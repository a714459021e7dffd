//! Per-step generation limits.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Output token ceilings for the movie generation steps.
///
/// Tagline and poster prompt calls run without a ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(default)]
pub struct GenerationSettings {
    /// Ceiling for the gritty scale answer
    gritty_max_tokens: u32,
    /// Ceiling for the description
    description_max_tokens: u32,
    /// Ceiling for the cast list
    cast_max_tokens: u32,
    /// Ceiling for the reviews
    reviews_max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            gritty_max_tokens: 300,
            description_max_tokens: 10_000,
            cast_max_tokens: 20_000,
            reviews_max_tokens: 10_000,
        }
    }
}

impl GenerationSettings {
    /// Start from the defaults.
    pub fn builder() -> GenerationSettingsBuilder {
        GenerationSettingsBuilder::default()
    }
}

/// Where research reads from and how large its extraction calls may be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(default, setter(into))]
pub struct ResearchSettings {
    /// Page rendered into the markdown digest
    source_url: String,
    /// Ceiling for trend extraction
    trends_max_tokens: u32,
    /// Ceiling for actor extraction
    actors_max_tokens: u32,
    /// Model for actor extraction; `None` uses the client's structured model
    actors_model: Option<String>,
}

impl Default for ResearchSettings {
    fn default() -> Self {
        Self {
            source_url: "https://editorial.rottentomatoes.com/guide/popular-movies/".to_string(),
            trends_max_tokens: 5_000,
            actors_max_tokens: 10_000,
            actors_model: None,
        }
    }
}

impl ResearchSettings {
    /// Start from the defaults.
    pub fn builder() -> ResearchSettingsBuilder {
        ResearchSettingsBuilder::default()
    }
}
