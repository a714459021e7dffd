//! Marquee - marketing collateral for movies that don't exist.
//!
//! Give Marquee a title and it writes the rest: a gritty rating, a pitch, a
//! tagline, a cast drawn from currently popular actors, a poster and a handful
//! of reviews. Any field can be locked so that the next regeneration keeps it.
//!
//! # Architecture
//!
//! - `marquee_error` - Error types
//! - `marquee_core` - Movie and research state, request types
//! - `marquee_interface` - Traits for generative backends and research reads
//! - `marquee_storage` - Key-addressed poster storage
//! - `marquee_models` - Cloudflare Workers AI and browser rendering clients
//! - `marquee_agents` - Movie and research entities, actors and registry
//! - `marquee_server` - HTTP API
//!
//! This crate re-exports everything for convenience and adds configuration
//! plus [`Marquee`], which wires the pieces together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod runtime;

pub use config::{
    MarqueeConfig, MarqueeConfigBuilder, ModelsConfig, ModelsConfigBuilder, ResearchConfig,
    ResearchConfigBuilder, ServerConfig, ServerConfigBuilder, StorageConfig,
    StorageConfigBuilder,
};
pub use runtime::Marquee;

pub use marquee_agents::*;
pub use marquee_core::*;
pub use marquee_error::*;
pub use marquee_interface::*;
pub use marquee_models::*;
pub use marquee_server::*;
pub use marquee_storage::{
    FileSystemStore, InMemoryStore, ObjectReference, ObjectStore, validate_key,
};
