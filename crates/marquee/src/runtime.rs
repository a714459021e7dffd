//! Wiring the entities, clients and storage together.

use crate::MarqueeConfig;
use marquee_agents::{
    LlmResearchGatherer, MovieRegistry, Observers, ResearchHandle, StepGenerator, TracingObserver,
};
use marquee_error::MarqueeResult;
use marquee_interface::ResearchReader;
use marquee_models::{BrowserRenderingClient, CloudflareCredentials, WorkersAiClient};
use marquee_server::AppState;
use marquee_storage::{FileSystemStore, ObjectStore};
use std::sync::Arc;
use tracing::{info, instrument};

/// A running Marquee instance: research entity, movie registry, poster store.
pub struct Marquee {
    registry: Arc<MovieRegistry>,
    research: ResearchHandle,
    posters: Arc<dyn ObjectStore>,
}

impl Marquee {
    /// Build everything from configuration and environment credentials.
    ///
    /// Starts the research schedule when one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing, the poster directory
    /// cannot be created, or an actor fails to spawn.
    #[instrument(skip_all)]
    pub async fn from_config(config: &MarqueeConfig) -> MarqueeResult<Self> {
        let credentials = CloudflareCredentials::from_env()?;
        let models = config.models();

        let client = Arc::new(
            WorkersAiClient::with_credentials(credentials.clone())
                .with_text_model(models.text_model().clone())
                .with_structured_model(models.structured_model().clone())
                .with_image_model(models.image_model().clone()),
        );
        let browser = Arc::new(BrowserRenderingClient::with_credentials(credentials));

        let gatherer = LlmResearchGatherer::new(client.clone(), browser)
            .with_settings(config.research().research_settings(models));
        let research = ResearchHandle::spawn(
            Arc::new(gatherer),
            Observers::new().with(Arc::new(TracingObserver::new("research"))),
        )
        .await?;
        if let Some(interval) = config.research().gather_interval() {
            research.start_schedule(interval)?;
        }

        let posters: Arc<dyn ObjectStore> =
            Arc::new(FileSystemStore::new(config.storage().poster_dir().clone())?);

        let reader: Arc<dyn ResearchReader> = Arc::new(research.clone());
        let generator = StepGenerator::new(client, reader, posters.clone())
            .with_settings(models.generation_settings());
        let registry = Arc::new(MovieRegistry::new(Arc::new(generator)));

        info!(
            poster_dir = %config.storage().poster_dir().display(),
            scheduled = config.research().gather_interval().is_some(),
            "Marquee ready"
        );
        Ok(Self {
            registry,
            research,
            posters,
        })
    }

    /// Movie entities by slug.
    pub fn registry(&self) -> &MovieRegistry {
        &self.registry
    }

    /// The research entity.
    pub fn research(&self) -> &ResearchHandle {
        &self.research
    }

    /// State for the HTTP handlers.
    pub fn app_state(&self) -> AppState {
        AppState::new(
            Arc::clone(&self.registry),
            self.research.clone(),
            Arc::clone(&self.posters),
        )
    }

    /// Stop every actor.
    pub async fn shutdown(&self) {
        self.registry.shutdown().await;
        self.research.stop();
    }
}
