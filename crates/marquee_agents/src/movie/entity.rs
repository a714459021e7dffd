//! Movie entity state machine.

use crate::{MovieGenerator, Observers};
use marquee_core::{CastMember, FieldName, FieldUpdate, GENERATED_FIELDS, MovieState, Review};
use marquee_error::{BackendError, MarqueeResult};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// One movie: its fields, lock set and loading set.
///
/// Every mutation is committed before observers are notified, and observers
/// see each mutation individually. The entity is not internally synchronized;
/// [`MovieActor`](crate::MovieActor) provides one-operation-at-a-time access.
pub struct Movie {
    state: MovieState,
    generator: Arc<dyn MovieGenerator>,
    observers: Observers<MovieState>,
}

impl Movie {
    /// Wrap `state`, generating through `generator`.
    pub fn new(state: MovieState, generator: Arc<dyn MovieGenerator>) -> Self {
        Self {
            state,
            generator,
            observers: Observers::new(),
        }
    }

    /// Attach observers notified after every mutation.
    pub fn with_observers(mut self, observers: Observers<MovieState>) -> Self {
        self.observers = observers;
        self
    }

    /// Current state.
    pub fn state(&self) -> &MovieState {
        &self.state
    }

    fn commit(&self) {
        self.observers.notify(&self.state);
    }

    /// Protect `field` from regeneration. Locking twice is the same as once.
    pub fn lock(&mut self, field: FieldName) {
        if self.state.insert_lock(field) {
            debug!(field = %field, "Locked field");
        }
        self.commit();
    }

    /// Allow `field` to be regenerated again.
    pub fn unlock(&mut self, field: FieldName) {
        if self.state.remove_lock(field) {
            debug!(field = %field, "Unlocked field");
        }
        self.commit();
    }

    /// Mark a generation step for `field` as in flight or finished.
    pub fn set_loading(&mut self, field: FieldName, loading: bool) {
        self.state.mark_loading(field, loading);
        self.commit();
    }

    /// Write one field and lock it.
    ///
    /// Values are stored as given; range checks belong to the caller.
    pub fn update(&mut self, update: FieldUpdate) {
        let field = update.field();
        self.state.apply(update);
        self.commit();
        self.lock(field);
    }

    /// Set the title and lock it.
    pub fn update_title(&mut self, title: impl Into<String>) {
        self.update(FieldUpdate::Title(title.into()));
    }

    /// Set the genre and lock it.
    pub fn update_genre(&mut self, genre: impl Into<String>) {
        self.update(FieldUpdate::Genre(genre.into()));
    }

    /// Set the gritty scale and lock it.
    pub fn update_gritty_scale(&mut self, gritty_scale: u8) {
        self.update(FieldUpdate::GrittyScale(gritty_scale));
    }

    /// Set the description and lock it.
    pub fn update_description(&mut self, description: impl Into<String>) {
        self.update(FieldUpdate::Description(description.into()));
    }

    /// Set the tagline and lock it.
    pub fn update_tagline(&mut self, tagline: impl Into<String>) {
        self.update(FieldUpdate::Tagline(tagline.into()));
    }

    /// Set the cast and lock it.
    pub fn update_cast(&mut self, cast: Vec<CastMember>) {
        self.update(FieldUpdate::Cast(cast));
    }

    /// Set the poster path and lock it.
    pub fn update_poster_url(&mut self, poster_url: impl Into<String>) {
        self.update(FieldUpdate::PosterUrl(poster_url.into()));
    }

    /// Set the reviews and lock it.
    pub fn update_reviews(&mut self, reviews: Vec<Review>) {
        self.update(FieldUpdate::Reviews(reviews));
    }

    /// Retitle the movie and regenerate every unlocked generated field.
    ///
    /// All pending fields are marked loading before the first step runs. Steps
    /// then run one at a time in [`GENERATED_FIELDS`] order, each seeing the
    /// values written by the steps before it. A failing step stops the pass:
    /// fields already written keep their new values, nothing is left loading,
    /// and the error is returned.
    #[instrument(skip(self, title), fields(slug = ?self.state.slug()))]
    pub async fn regenerate(&mut self, title: impl Into<String>) -> MarqueeResult<()> {
        self.update_title(title);

        let pending: Vec<FieldName> = GENERATED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.state.is_locked(*field))
            .collect();
        info!(title = %self.state.title(), pending = pending.len(), "Regenerating movie");

        for field in &pending {
            self.set_loading(*field, true);
        }

        for (index, field) in pending.iter().copied().enumerate() {
            let snapshot = self.state.clone();
            match generate_field(self.generator.as_ref(), field, &snapshot).await {
                Ok(update) => {
                    self.update(update);
                    self.set_loading(field, false);
                    debug!(field = %field, "Generated field");
                }
                Err(e) => {
                    warn!(field = %field, error = %e, "Generation step failed");
                    for unfinished in &pending[index..] {
                        self.set_loading(*unfinished, false);
                    }
                    return Err(e);
                }
            }
        }

        info!("Regeneration complete");
        Ok(())
    }
}

/// Run the step for `field` and wrap its value as an update to that field.
async fn generate_field(
    generator: &dyn MovieGenerator,
    field: FieldName,
    movie: &MovieState,
) -> MarqueeResult<FieldUpdate> {
    let update = match field {
        FieldName::GrittyScale => FieldUpdate::GrittyScale(generator.gritty_scale(movie).await?),
        FieldName::Description => FieldUpdate::Description(generator.description(movie).await?),
        FieldName::Tagline => FieldUpdate::Tagline(generator.tagline(movie).await?),
        FieldName::Cast => FieldUpdate::Cast(generator.cast(movie).await?),
        FieldName::PosterUrl => FieldUpdate::PosterUrl(generator.poster(movie).await?),
        FieldName::Reviews => FieldUpdate::Reviews(generator.reviews(movie).await?),
        FieldName::Title | FieldName::Genre => {
            return Err(BackendError::new(format!("{} is never generated", field)).into());
        }
    };
    Ok(update)
}

impl std::fmt::Debug for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Movie")
            .field("state", &self.state)
            .field("observers", &self.observers)
            .finish()
    }
}
