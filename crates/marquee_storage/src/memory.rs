//! In-memory object storage.

use crate::{ObjectReference, ObjectStore, validate_key};
use marquee_error::MarqueeResult;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store, used in tests and offline CLI runs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    objects: RwLock<HashMap<String, (String, Vec<u8>)>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    /// Whether nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }

    /// All stored keys, sorted.
    pub async fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.objects.read().await.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait::async_trait]
impl ObjectStore for InMemoryStore {
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    async fn put(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> MarqueeResult<ObjectReference> {
        validate_key(key)?;
        self.objects
            .write()
            .await
            .insert(key.to_string(), (content_type.to_string(), data.to_vec()));
        tracing::debug!("Stored object in memory");
        Ok(ObjectReference::new(key, "memory", data.len(), content_type))
    }

    async fn get(&self, key: &str) -> MarqueeResult<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self
            .objects
            .read()
            .await
            .get(key)
            .map(|(_, data)| data.clone()))
    }

    async fn exists(&self, key: &str) -> MarqueeResult<bool> {
        validate_key(key)?;
        Ok(self.objects.read().await.contains_key(key))
    }
}
