//! Tests for the filesystem and in-memory object stores.

use marquee_error::MarqueeErrorKind;
use marquee_storage::{FileSystemStore, InMemoryStore, ObjectStore, StorageErrorKind};
use tempfile::TempDir;

#[tokio::test]
async fn test_filesystem_put_and_get() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    let data = b"\xFF\xD8\xFFjpeg bytes";
    let reference = store.put("heat/abc.jpg", data, "image/jpeg").await.unwrap();

    assert_eq!(reference.key(), "heat/abc.jpg");
    assert_eq!(reference.storage_backend().to_string(), "filesystem");
    assert_eq!(*reference.size_bytes(), data.len() as u64);
    assert!(temp_dir.path().join("heat").join("abc.jpg").exists());

    let retrieved = store.get("heat/abc.jpg").await.unwrap();
    assert_eq!(retrieved.as_deref(), Some(&data[..]));
}

#[tokio::test]
async fn test_filesystem_missing_key_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    assert!(store.get("nope/missing.jpg").await.unwrap().is_none());
    assert!(!store.exists("nope/missing.jpg").await.unwrap());
}

#[tokio::test]
async fn test_filesystem_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path()).unwrap();

    store.put("heat/abc.jpg", b"data", "image/jpeg").await.unwrap();

    assert!(!temp_dir.path().join("heat").join("abc.tmp").exists());
    assert!(store.exists("heat/abc.jpg").await.unwrap());
}

#[tokio::test]
async fn test_filesystem_rejects_traversal() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileSystemStore::new(temp_dir.path().join("posters")).unwrap();

    let err = store.get("../secret.jpg").await.unwrap_err();
    match err.kind() {
        MarqueeErrorKind::Storage(e) => {
            assert!(matches!(e.kind, StorageErrorKind::InvalidKey(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_memory_store_round_trip() {
    let store = InMemoryStore::new();
    assert!(store.is_empty().await);

    store.put("a/1.jpg", b"one", "image/jpeg").await.unwrap();
    store.put("a/1.jpg", b"uno", "image/jpeg").await.unwrap();

    assert_eq!(store.len().await, 1);
    assert_eq!(store.get("a/1.jpg").await.unwrap(), Some(b"uno".to_vec()));
    assert_eq!(store.keys().await, vec!["a/1.jpg".to_string()]);
}
