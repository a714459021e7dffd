//! The seam between the movie state machine and the generative service.

use async_trait::async_trait;
use marquee_core::{CastMember, MovieState, Review};
use marquee_error::MarqueeResult;

/// Produces one generated field from a snapshot of the movie.
///
/// Implementations read the snapshot (and whatever research they were given)
/// but never write entity state. The entity chooses which step runs for each
/// field and applies the returned value to that field only.
#[async_trait]
pub trait MovieGenerator: Send + Sync {
    /// Tone from 1 to 5. Unusable responses fall back to a default rather than failing.
    async fn gritty_scale(&self, movie: &MovieState) -> MarqueeResult<u8>;

    /// Plot description.
    async fn description(&self, movie: &MovieState) -> MarqueeResult<String>;

    /// Billboard tagline.
    async fn tagline(&self, movie: &MovieState) -> MarqueeResult<String>;

    /// Characters and the actors cast to play them.
    async fn cast(&self, movie: &MovieState) -> MarqueeResult<Vec<CastMember>>;

    /// Render and store a poster, returning its public path.
    async fn poster(&self, movie: &MovieState) -> MarqueeResult<String>;

    /// Critic reviews.
    async fn reviews(&self, movie: &MovieState) -> MarqueeResult<Vec<Review>>;
}
