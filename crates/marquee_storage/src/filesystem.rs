//! Filesystem-based object storage.

use crate::{ObjectReference, ObjectStore, validate_key};
use marquee_error::{MarqueeResult, StorageError, StorageErrorKind};
use std::path::PathBuf;

/// Filesystem storage backend.
///
/// Objects live at `{base_path}/{key}`, so the key `heat/1a2b.jpg` becomes
/// `{base_path}/heat/1a2b.jpg`. Writes go to a temp file that is renamed into
/// place, so readers never observe a partial image.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    base_path: PathBuf,
}

impl FileSystemStore {
    /// Create a new filesystem store rooted at `base_path`.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> MarqueeResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem store");
        Ok(Self { base_path })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn path_for(&self, key: &str) -> MarqueeResult<PathBuf> {
        validate_key(key)?;
        Ok(key
            .split('/')
            .fold(self.base_path.clone(), |path, segment| path.join(segment)))
    }
}

#[async_trait::async_trait]
impl ObjectStore for FileSystemStore {
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    async fn put(
        &self,
        key: &str,
        data: &[u8],
        content_type: &str,
    ) -> MarqueeResult<ObjectReference> {
        let path = self.path_for(key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(path = %path.display(), "Stored object");
        Ok(ObjectReference::new(key, "filesystem", data.len(), content_type))
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> MarqueeResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;

        match tokio::fs::read(&path).await {
            Ok(data) => {
                tracing::debug!(size = data.len(), "Read object");
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    async fn exists(&self, key: &str) -> MarqueeResult<bool> {
        let path = self.path_for(key)?;
        Ok(tokio::fs::try_exists(path).await.unwrap_or(false))
    }
}
