//! Keyed store of movie entities.

use crate::{MovieGenerator, MovieHandle, Observers, TracingObserver};
use marquee_core::MovieState;
use marquee_error::MarqueeResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// One movie entity per slug, spawned on first use.
///
/// There is no removal path: entities live until [`shutdown`](Self::shutdown)
/// or process exit. An entity whose actor has died is replaced with a fresh one
/// the next time its slug is opened.
pub struct MovieRegistry {
    movies: Mutex<HashMap<String, MovieHandle>>,
    generator: Arc<dyn MovieGenerator>,
    observers: Observers<MovieState>,
}

impl MovieRegistry {
    /// Create an empty registry whose entities generate through `generator`.
    pub fn new(generator: Arc<dyn MovieGenerator>) -> Self {
        Self {
            movies: Mutex::new(HashMap::new()),
            generator,
            observers: Observers::new(),
        }
    }

    /// Observers attached to every entity opened after this call.
    pub fn with_observers(mut self, observers: Observers<MovieState>) -> Self {
        self.observers = observers;
        self
    }

    /// Return the entity for `slug`, spawning it if absent.
    #[instrument(skip(self))]
    pub async fn open(&self, slug: &str) -> MarqueeResult<MovieHandle> {
        let mut movies = self.movies.lock().await;
        if let Some(handle) = movies.get(slug).filter(|handle| handle.is_alive()) {
            return Ok(handle.clone());
        }

        debug!("Spawning movie entity");
        let observers = self
            .observers
            .clone()
            .with(Arc::new(TracingObserver::new(slug)));
        let handle = MovieHandle::spawn(slug, Arc::clone(&self.generator), observers).await?;
        movies.insert(slug.to_string(), handle.clone());
        info!(open = movies.len(), "Opened movie entity");
        Ok(handle)
    }

    /// Slugs of every entity opened so far.
    pub async fn slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self.movies.lock().await.keys().cloned().collect();
        slugs.sort();
        slugs
    }

    /// Stop every entity and forget them.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) {
        let mut movies = self.movies.lock().await;
        for handle in movies.values() {
            handle.stop();
        }
        info!(stopped = movies.len(), "Movie registry shut down");
        movies.clear();
    }
}

impl std::fmt::Debug for MovieRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieRegistry")
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
