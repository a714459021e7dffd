//! Names of the individually lockable movie fields.

use serde::{Deserialize, Serialize};

/// One user-visible attribute of a movie that can be locked or loading.
///
/// Wire names are camelCase (`posterUrl`, `grittyScale`).
///
/// # Examples
///
/// ```
/// use marquee_core::FieldName;
/// use std::str::FromStr;
///
/// assert_eq!(FieldName::PosterUrl.to_string(), "posterUrl");
/// assert_eq!(FieldName::from_str("grittyScale").unwrap(), FieldName::GrittyScale);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldName {
    /// Movie title
    Title,
    /// Plot description
    Description,
    /// Genre (user-set only)
    Genre,
    /// Billboard tagline
    Tagline,
    /// Characters and actors
    Cast,
    /// Critic reviews
    Reviews,
    /// Path of the generated poster image
    PosterUrl,
    /// Tone from 1 (family) to 5 (brutal)
    GrittyScale,
}

/// Fields produced by a regeneration pass, in generation order.
///
/// Each field may depend on the ones before it: description reads the gritty
/// scale, tagline reads the description, cast reads the description, the poster
/// reads everything before it, and reviews read description, cast and tagline.
pub const GENERATED_FIELDS: [FieldName; 6] = [
    FieldName::GrittyScale,
    FieldName::Description,
    FieldName::Tagline,
    FieldName::Cast,
    FieldName::PosterUrl,
    FieldName::Reviews,
];
