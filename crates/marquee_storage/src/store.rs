//! Storage trait definition.

use crate::ObjectReference;
use marquee_error::MarqueeResult;

/// Trait for pluggable object storage backends.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `data` under `key`, replacing anything already there.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the backend write fails.
    async fn put(&self, key: &str, data: &[u8], content_type: &str)
    -> MarqueeResult<ObjectReference>;

    /// Read the bytes stored under `key`, or `None` if nothing is stored there.
    async fn get(&self, key: &str) -> MarqueeResult<Option<Vec<u8>>>;

    /// Check whether an object exists under `key`.
    async fn exists(&self, key: &str) -> MarqueeResult<bool>;
}
