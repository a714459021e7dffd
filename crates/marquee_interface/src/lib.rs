//! Trait definitions for Marquee's external collaborators.
//!
//! The movie and research entities never talk to a concrete service; they are
//! handed implementations of these traits, which keeps them testable with stubs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageGeneration, JsonMode, MarkdownSource, MarqueeDriver, ResearchReader};
