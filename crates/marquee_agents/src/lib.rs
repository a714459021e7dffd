//! Movie and research entities for Marquee.
//!
//! A [`Movie`] owns the marketing fields of one movie along with the sets of
//! locked and loading fields. Regeneration walks the generated fields in a fixed
//! dependency order, skipping anything the user has locked, and asks a
//! [`MovieGenerator`] for each new value. [`Research`] owns the trend and actor
//! lists that two of the generation steps read through
//! [`ResearchReader`](marquee_interface::ResearchReader).
//!
//! Both entities run inside `ractor` actors so that each instance processes one
//! operation at a time. [`MovieRegistry`] opens one actor per slug on first use;
//! [`ResearchHandle`] wraps the single research actor.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod call;
mod movie;
mod observer;
mod registry;
mod research;
mod settings;

pub use movie::{
    DEFAULT_GRITTY_SCALE, Movie, MovieActor, MovieActorArgs, MovieGenerator, MovieHandle,
    MovieMessage, StepGenerator, parse_gritty_scale, poster_path,
};
pub use observer::{BroadcastObserver, Observers, StateObserver, TracingObserver, WatchObserver};
pub use registry::MovieRegistry;
pub use research::{
    LlmResearchGatherer, Research, ResearchActor, ResearchActorState, ResearchGatherer,
    ResearchHandle, ResearchMessage, compare_surnames, sort_actors_by_surname,
};
pub use settings::{
    GenerationSettings, GenerationSettingsBuilder, ResearchSettings, ResearchSettingsBuilder,
};
