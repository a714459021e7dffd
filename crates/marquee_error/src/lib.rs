//! Error types for Marquee.
//!
//! This crate provides the foundation error types used throughout the Marquee workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use marquee_error::{MarqueeResult, HttpError};
//!
//! fn fetch_data() -> MarqueeResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entity;
mod error;
mod generation;
mod message;
mod storage;

pub use entity::{EntityError, EntityErrorKind};
pub use error::{MarqueeError, MarqueeErrorKind, MarqueeResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use message::{BackendError, ConfigError, HttpError, JsonError};
pub use storage::{StorageError, StorageErrorKind};
