//! The movie entity.

mod actor;
mod entity;
mod generator;
mod handle;
mod prompts;
mod steps;

pub use actor::{MovieActor, MovieActorArgs, MovieMessage};
pub use entity::Movie;
pub use generator::MovieGenerator;
pub use handle::MovieHandle;
pub use steps::{DEFAULT_GRITTY_SCALE, StepGenerator, parse_gritty_scale, poster_path};
