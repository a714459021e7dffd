//! Research entity.

use crate::{Observers, ResearchGatherer, sort_actors_by_surname};
use marquee_core::ResearchState;
use marquee_error::MarqueeResult;
use std::sync::Arc;
use tracing::{info, instrument};

/// Holds the most recent trend and actor lists.
///
/// A gather replaces everything; there is no per-field locking here.
pub struct Research {
    state: ResearchState,
    gatherer: Arc<dyn ResearchGatherer>,
    observers: Observers<ResearchState>,
}

impl Research {
    /// Empty research that gathers through `gatherer`.
    pub fn new(gatherer: Arc<dyn ResearchGatherer>) -> Self {
        Self {
            state: ResearchState::default(),
            gatherer,
            observers: Observers::new(),
        }
    }

    /// Attach observers notified after every mutation.
    pub fn with_observers(mut self, observers: Observers<ResearchState>) -> Self {
        self.observers = observers;
        self
    }

    /// Current state.
    pub fn state(&self) -> &ResearchState {
        &self.state
    }

    /// Cached trends; empty until the first gather.
    pub fn popular_trends(&self) -> &[String] {
        self.state.trends()
    }

    /// Cached actors by surname; empty until the first gather.
    pub fn popular_actors(&self) -> &[String] {
        self.state.actors()
    }

    /// Fetch a fresh digest and re-extract both lists.
    ///
    /// The digest is stored as soon as it arrives. The lists are only replaced
    /// when both extractions succeed; on failure the previous lists remain.
    #[instrument(skip(self))]
    pub async fn gather(&mut self) -> MarqueeResult<()> {
        let digest = self.gatherer.fetch_digest().await?;
        self.state.set_digest(digest.clone());
        self.observers.notify(&self.state);

        let (trends, mut actors) = tokio::try_join!(
            self.gatherer.extract_trends(&digest),
            self.gatherer.extract_actors(&digest)
        )?;
        sort_actors_by_surname(&mut actors);

        info!(trends = trends.len(), actors = actors.len(), "Research gathered");
        self.state.set_lists(trends, actors);
        self.observers.notify(&self.state);
        Ok(())
    }
}

impl std::fmt::Debug for Research {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Research")
            .field("state", &self.state)
            .field("observers", &self.observers)
            .finish()
    }
}
