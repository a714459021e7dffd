//! Core data types for Marquee.
//!
//! This crate provides the foundation data types shared by every Marquee crate:
//! conversation messages sent to the generative service, and the state owned by
//! the movie and research entities.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod field;
mod message;
mod movie;
mod output;
mod request;
mod research;
mod role;
mod telemetry;

pub use field::{FieldName, GENERATED_FIELDS};
pub use message::Message;
pub use movie::{CastMember, DEFAULT_TITLE, FieldUpdate, MovieState, Review};
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use research::ResearchState;
pub use role::Role;
pub use telemetry::{init_telemetry, shutdown_telemetry};
