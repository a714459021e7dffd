//! Configuration loaded from `marquee.toml`.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration. Credentials never live here; they come from
//! `CLOUDFLARE_ACCOUNT_ID` and `CLOUDFLARE_API_TOKEN`.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8787"
//!
//! [research]
//! gather_interval_hours = 6
//! ```

use derive_builder::Builder;
use derive_getters::Getters;
use marquee_agents::{GenerationSettings, ResearchSettings};
use marquee_error::{ConfigError, MarqueeResult};
use marquee_models::{DEFAULT_IMAGE_MODEL, DEFAULT_STRUCTURED_MODEL, DEFAULT_TEXT_MODEL};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[serde(default)]
#[builder(default)]
pub struct MarqueeConfig {
    /// HTTP server settings
    server: ServerConfig,
    /// Poster storage settings
    storage: StorageConfig,
    /// Model ids and token ceilings
    models: ModelsConfig,
    /// Research source and schedule
    research: ResearchConfig,
}

impl MarqueeConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        debug!("Loading configuration from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml(content: &str) -> MarqueeResult<Self> {
        Ok(toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?)
    }

    /// Start building a configuration from defaults.
    pub fn builder() -> MarqueeConfigBuilder {
        MarqueeConfigBuilder::default()
    }
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[serde(default)]
#[builder(default)]
pub struct ServerConfig {
    /// Address the HTTP API listens on
    bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8787)),
        }
    }
}

/// `[storage]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct StorageConfig {
    /// Directory posters are written to
    poster_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            poster_dir: PathBuf::from("./data/posters"),
        }
    }
}

/// `[models]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[serde(default)]
#[builder(default)]
pub struct ModelsConfig {
    /// Free-text model
    #[builder(setter(into))]
    text_model: String,
    /// Schema-constrained output model
    #[builder(setter(into))]
    structured_model: String,
    /// Image model
    #[builder(setter(into))]
    image_model: String,
    /// Ceiling for the gritty scale answer
    gritty_max_tokens: u32,
    /// Ceiling for descriptions
    description_max_tokens: u32,
    /// Ceiling for cast lists
    cast_max_tokens: u32,
    /// Ceiling for reviews
    reviews_max_tokens: u32,
    /// Ceiling for trend extraction
    trends_max_tokens: u32,
    /// Ceiling for actor extraction
    actors_max_tokens: u32,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            structured_model: DEFAULT_STRUCTURED_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            gritty_max_tokens: 300,
            description_max_tokens: 10_000,
            cast_max_tokens: 20_000,
            reviews_max_tokens: 10_000,
            trends_max_tokens: 5_000,
            actors_max_tokens: 10_000,
        }
    }
}

impl ModelsConfig {
    /// Start building from the default models.
    pub fn builder() -> ModelsConfigBuilder {
        ModelsConfigBuilder::default()
    }

    /// Token ceilings for the movie generation steps.
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::builder()
            .gritty_max_tokens(self.gritty_max_tokens)
            .description_max_tokens(self.description_max_tokens)
            .cast_max_tokens(self.cast_max_tokens)
            .reviews_max_tokens(self.reviews_max_tokens)
            .build()
            .unwrap_or_default()
    }
}

const SECONDS_PER_HOUR: u64 = 60 * 60;

/// `[research]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[serde(default)]
#[builder(default)]
pub struct ResearchConfig {
    /// Page rendered into the research digest
    #[builder(setter(into))]
    source_url: String,
    /// Hours between automatic gathers; absent means on demand only
    gather_interval_hours: Option<u64>,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            source_url: ResearchSettings::default().source_url().clone(),
            gather_interval_hours: None,
        }
    }
}

impl ResearchConfig {
    /// Time between automatic gathers, if scheduled. Huge values saturate.
    pub fn gather_interval(&self) -> Option<Duration> {
        self.gather_interval_hours
            .filter(|hours| *hours > 0)
            .map(|hours| Duration::from_secs(hours.saturating_mul(SECONDS_PER_HOUR)))
    }

    /// Research settings; actor extraction runs on the free-text model.
    pub fn research_settings(&self, models: &ModelsConfig) -> ResearchSettings {
        ResearchSettings::builder()
            .source_url(self.source_url.clone())
            .trends_max_tokens(models.trends_max_tokens)
            .actors_max_tokens(models.actors_max_tokens)
            .actors_model(Some(models.text_model.clone()))
            .build()
            .unwrap_or_default()
    }
}
