//! Movie entity state.

use crate::FieldName;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Title given to a movie before anything has been set.
pub const DEFAULT_TITLE: &str = "Unnamed";

/// A character and the actor cast to play them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastMember {
    /// The scripted name of the character
    pub character: String,
    /// The actor suggested for the role
    pub actor: String,
}

/// A synthetic critic review.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Review {
    /// Full name of the reviewer
    pub author: String,
    /// Review text
    pub text: String,
    /// Whole-number star rating, 1 to 5
    pub rating: u8,
}

/// Snapshot of one movie entity.
///
/// Lock and loading sets are true sets: a field is either present once or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct MovieState {
    pub(crate) title: String,
    pub(crate) slug: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) genre: Option<String>,
    pub(crate) tagline: Option<String>,
    pub(crate) director: Option<String>,
    pub(crate) poster_url: Option<String>,
    pub(crate) gritty_scale: Option<u8>,
    pub(crate) cast: Vec<CastMember>,
    pub(crate) reviews: Vec<Review>,
    pub(crate) locked_fields: BTreeSet<FieldName>,
    pub(crate) loading_fields: BTreeSet<FieldName>,
}

impl Default for MovieState {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            slug: None,
            description: None,
            genre: None,
            tagline: None,
            director: None,
            poster_url: None,
            gritty_scale: None,
            cast: Vec::new(),
            reviews: Vec::new(),
            locked_fields: BTreeSet::new(),
            loading_fields: BTreeSet::new(),
        }
    }
}

impl MovieState {
    /// Initial state for the entity registered under `slug`.
    pub fn for_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// Whether `field` is protected from regeneration.
    pub fn is_locked(&self, field: FieldName) -> bool {
        self.locked_fields.contains(&field)
    }

    /// Whether a generation step for `field` is in flight.
    pub fn is_loading(&self, field: FieldName) -> bool {
        self.loading_fields.contains(&field)
    }

    /// Write a single field value. Lock bookkeeping is the caller's job.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Title(title) => self.title = title,
            FieldUpdate::Genre(genre) => self.genre = Some(genre),
            FieldUpdate::Description(description) => self.description = Some(description),
            FieldUpdate::Tagline(tagline) => self.tagline = Some(tagline),
            FieldUpdate::Cast(cast) => self.cast = cast,
            FieldUpdate::PosterUrl(poster_url) => self.poster_url = Some(poster_url),
            FieldUpdate::Reviews(reviews) => self.reviews = reviews,
            FieldUpdate::GrittyScale(scale) => self.gritty_scale = Some(scale),
        }
    }

    /// Add `field` to the locked set. Returns false if it was already locked.
    pub fn insert_lock(&mut self, field: FieldName) -> bool {
        self.locked_fields.insert(field)
    }

    /// Remove `field` from the locked set. Returns false if it was not locked.
    pub fn remove_lock(&mut self, field: FieldName) -> bool {
        self.locked_fields.remove(&field)
    }

    /// Add or remove `field` from the loading set.
    pub fn mark_loading(&mut self, field: FieldName, loading: bool) -> bool {
        if loading {
            self.loading_fields.insert(field)
        } else {
            self.loading_fields.remove(&field)
        }
    }
}

/// A new value for exactly one field.
///
/// Serialized as `{"field": "tagline", "value": "..."}`.
///
/// # Examples
///
/// ```
/// use marquee_core::{FieldName, FieldUpdate};
///
/// let update: FieldUpdate =
///     serde_json::from_str(r#"{"field":"grittyScale","value":4}"#).unwrap();
/// assert_eq!(update, FieldUpdate::GrittyScale(4));
/// assert_eq!(update.field(), FieldName::GrittyScale);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    /// New title
    Title(String),
    /// New genre
    Genre(String),
    /// New description
    Description(String),
    /// New tagline
    Tagline(String),
    /// New cast list
    Cast(Vec<CastMember>),
    /// New poster path
    PosterUrl(String),
    /// New reviews
    Reviews(Vec<Review>),
    /// New gritty scale (range is not checked here)
    GrittyScale(u8),
}

impl FieldUpdate {
    /// The field this update writes.
    pub fn field(&self) -> FieldName {
        match self {
            FieldUpdate::Title(_) => FieldName::Title,
            FieldUpdate::Genre(_) => FieldName::Genre,
            FieldUpdate::Description(_) => FieldName::Description,
            FieldUpdate::Tagline(_) => FieldName::Tagline,
            FieldUpdate::Cast(_) => FieldName::Cast,
            FieldUpdate::PosterUrl(_) => FieldName::PosterUrl,
            FieldUpdate::Reviews(_) => FieldName::Reviews,
            FieldUpdate::GrittyScale(_) => FieldName::GrittyScale,
        }
    }
}
