//! Typed client for a movie actor.

use crate::call::unwrap_call_result;
use crate::{
    BroadcastObserver, MovieActor, MovieActorArgs, MovieGenerator, MovieMessage, Observers,
};
use marquee_core::{CastMember, FieldName, FieldUpdate, MovieState, Review};
use marquee_error::{EntityError, EntityErrorKind, MarqueeResult};
use ractor::{Actor, ActorRef, ActorStatus};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, instrument};

/// States buffered per event subscriber before it starts lagging.
const EVENT_CAPACITY: usize = 64;

/// Cloneable handle to a running movie actor.
#[derive(Debug, Clone)]
pub struct MovieHandle {
    slug: String,
    actor: ActorRef<MovieMessage>,
    events: broadcast::Sender<MovieState>,
}

impl MovieHandle {
    /// Spawn a fresh movie entity for `slug`.
    ///
    /// `observers` are notified after the handle's own event broadcast.
    #[instrument(skip(generator, observers))]
    pub async fn spawn(
        slug: &str,
        generator: Arc<dyn MovieGenerator>,
        observers: Observers<MovieState>,
    ) -> MarqueeResult<Self> {
        let broadcast = BroadcastObserver::new(EVENT_CAPACITY);
        let events = broadcast.sender();

        let mut all = Observers::new().with(Arc::new(broadcast));
        all.extend(observers);

        let args = MovieActorArgs {
            state: MovieState::for_slug(slug),
            generator,
            observers: all,
        };

        let (actor, _) = Actor::spawn(None, MovieActor, args).await.map_err(|e| {
            error!(error = ?e, "Failed to spawn movie actor");
            EntityError::new(EntityErrorKind::Spawn {
                name: slug.to_string(),
                reason: e.to_string(),
            })
        })?;

        Ok(Self {
            slug: slug.to_string(),
            actor,
            events,
        })
    }

    /// Registry key of this movie.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Receive every state committed after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<MovieState> {
        self.events.subscribe()
    }

    /// Whether the actor can still take messages.
    pub fn is_alive(&self) -> bool {
        !matches!(
            self.actor.get_status(),
            ActorStatus::Stopping | ActorStatus::Stopped
        )
    }

    /// Stop the actor. Queued messages are dropped.
    pub fn stop(&self) {
        self.actor.stop(None);
    }

    /// Current state.
    pub async fn state(&self) -> MarqueeResult<MovieState> {
        unwrap_call_result(
            self.actor
                .call(|reply| MovieMessage::GetState { reply }, None)
                .await,
        )
    }

    /// Retitle and regenerate. Waits for the whole pass to finish.
    #[instrument(skip(self, title), fields(slug = %self.slug))]
    pub async fn regenerate(&self, title: impl Into<String>) -> MarqueeResult<MovieState> {
        let title = title.into();
        unwrap_call_result(
            self.actor
                .call(|reply| MovieMessage::Regenerate { title, reply }, None)
                .await,
        )?
    }

    /// Lock `field`.
    pub async fn lock(&self, field: FieldName) -> MarqueeResult<MovieState> {
        unwrap_call_result(
            self.actor
                .call(|reply| MovieMessage::Lock { field, reply }, None)
                .await,
        )
    }

    /// Unlock `field`.
    pub async fn unlock(&self, field: FieldName) -> MarqueeResult<MovieState> {
        unwrap_call_result(
            self.actor
                .call(|reply| MovieMessage::Unlock { field, reply }, None)
                .await,
        )
    }

    /// Write one field and lock it.
    pub async fn update(&self, update: FieldUpdate) -> MarqueeResult<MovieState> {
        unwrap_call_result(
            self.actor
                .call(|reply| MovieMessage::Update { update, reply }, None)
                .await,
        )
    }

    /// Set and lock the title.
    pub async fn update_title(&self, title: impl Into<String>) -> MarqueeResult<MovieState> {
        self.update(FieldUpdate::Title(title.into())).await
    }

    /// Set and lock the genre.
    pub async fn update_genre(&self, genre: impl Into<String>) -> MarqueeResult<MovieState> {
        self.update(FieldUpdate::Genre(genre.into())).await
    }

    /// Set and lock the gritty scale.
    pub async fn update_gritty_scale(&self, gritty_scale: u8) -> MarqueeResult<MovieState> {
        self.update(FieldUpdate::GrittyScale(gritty_scale)).await
    }

    /// Set and lock the description.
    pub async fn update_description(
        &self,
        description: impl Into<String>,
    ) -> MarqueeResult<MovieState> {
        self.update(FieldUpdate::Description(description.into())).await
    }

    /// Set and lock the tagline.
    pub async fn update_tagline(&self, tagline: impl Into<String>) -> MarqueeResult<MovieState> {
        self.update(FieldUpdate::Tagline(tagline.into())).await
    }

    /// Set and lock the cast.
    pub async fn update_cast(&self, cast: Vec<CastMember>) -> MarqueeResult<MovieState> {
        self.update(FieldUpdate::Cast(cast)).await
    }

    /// Set and lock the poster path.
    pub async fn update_poster_url(
        &self,
        poster_url: impl Into<String>,
    ) -> MarqueeResult<MovieState> {
        self.update(FieldUpdate::PosterUrl(poster_url.into())).await
    }

    /// Set and lock the reviews.
    pub async fn update_reviews(&self, reviews: Vec<Review>) -> MarqueeResult<MovieState> {
        self.update(FieldUpdate::Reviews(reviews)).await
    }
}
