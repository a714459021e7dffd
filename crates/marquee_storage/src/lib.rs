//! Key-addressed object storage for generated artifacts.
//!
//! Generated posters are written once under a caller-chosen key such as
//! `heat/4f0c...jpg` and later served back by the same key.
//!
//! # Example
//!
//! ```rust
//! use marquee_storage::{InMemoryStore, ObjectStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//! store.put("heat/poster.jpg", &[0xFF, 0xD8], "image/jpeg").await?;
//!
//! let bytes = store.get("heat/poster.jpg").await?;
//! assert_eq!(bytes.as_deref(), Some(&[0xFF, 0xD8][..]));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod key;
mod memory;
mod reference;
mod store;

pub use filesystem::FileSystemStore;
pub use key::validate_key;
pub use marquee_error::{StorageError, StorageErrorKind};
pub use memory::InMemoryStore;
pub use reference::ObjectReference;
pub use store::ObjectStore;
