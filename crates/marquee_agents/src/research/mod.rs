//! The research entity.

mod actor;
mod entity;
mod gatherer;
mod handle;
mod sort;

pub use actor::{ResearchActor, ResearchActorState, ResearchMessage};
pub use entity::Research;
pub use gatherer::{LlmResearchGatherer, ResearchGatherer};
pub use handle::ResearchHandle;
pub use sort::{compare_surnames, sort_actors_by_surname};
