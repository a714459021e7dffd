//! Object reference types.

use derive_getters::Getters;

/// Where an object landed after a successful `put`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct ObjectReference {
    /// Key the object was written under
    key: String,
    /// Storage backend name (e.g., "filesystem", "memory")
    #[getter(skip)]
    storage_backend: &'static str,
    /// Size of the object in bytes
    size_bytes: u64,
    /// MIME type recorded at write time
    content_type: String,
}

impl ObjectReference {
    pub(crate) fn new(
        key: &str,
        storage_backend: &'static str,
        size_bytes: usize,
        content_type: &str,
    ) -> Self {
        Self {
            key: key.to_string(),
            storage_backend,
            size_bytes: size_bytes as u64,
            content_type: content_type.to_string(),
        }
    }

    /// Get field `storage_backend` from instance of `ObjectReference`.
    pub fn storage_backend(&self) -> &'static str {
        self.storage_backend
    }
}
