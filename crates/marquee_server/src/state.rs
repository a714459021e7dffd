//! Shared handler state.

use marquee_agents::{MovieRegistry, ResearchHandle};
use marquee_storage::ObjectStore;
use std::sync::Arc;

/// Everything the handlers reach: movie entities, research, poster bytes.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<MovieRegistry>,
    research: ResearchHandle,
    posters: Arc<dyn ObjectStore>,
}

impl AppState {
    /// Creates new handler state.
    pub fn new(
        registry: Arc<MovieRegistry>,
        research: ResearchHandle,
        posters: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            registry,
            research,
            posters,
        }
    }

    /// Movie entities by slug.
    pub fn registry(&self) -> &MovieRegistry {
        &self.registry
    }

    /// The research entity.
    pub fn research(&self) -> &ResearchHandle {
        &self.research
    }

    /// Stored poster images.
    pub fn posters(&self) -> &dyn ObjectStore {
        self.posters.as_ref()
    }
}
