use minihttpd::store::{FileStore, StoreError};

#[tokio::test]
async fn test_open_indexes_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), b"alpha").unwrap();
    std::fs::write(dir.path().join("b.bin"), b"\x00\x01").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("nested").join("c.txt"), b"deep").unwrap();

    let store = FileStore::open(dir.path()).await.unwrap();

    assert_eq!(store.known_files().await, vec!["a.txt", "b.bin"]);
    assert!(store.contains("a.txt").await);
    assert!(!store.contains("nested").await);
    assert!(!store.contains("c.txt").await);
}

#[tokio::test]
async fn test_open_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = FileStore::open(&missing).await.unwrap_err();
    assert!(matches!(err, StoreError::NotADirectory(_)));
}

#[tokio::test]
async fn test_open_configured_disables_on_missing_or_absent_dir() {
    let dir = tempfile::tempdir().unwrap();

    assert!(FileStore::open_configured(None).await.is_none());
    assert!(FileStore::open_configured(Some(dir.path().join("nope").as_path())).await.is_none());
    assert!(FileStore::open_configured(Some(dir.path())).await.is_some());
}

#[tokio::test]
async fn test_read_known_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), b"alpha").unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();

    assert_eq!(store.read("a.txt").await.unwrap(), b"alpha");
}

#[tokio::test]
async fn test_read_unindexed_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();

    // Created behind the store's back after the scan
    std::fs::write(dir.path().join("late.txt"), b"late").unwrap();

    assert!(matches!(
        store.read("late.txt").await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_write_then_read_updates_index() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();

    store.write("report.txt", b"hello").await.unwrap();

    assert!(store.contains("report.txt").await);
    assert_eq!(store.read("report.txt").await.unwrap(), b"hello");
    assert_eq!(std::fs::read(dir.path().join("report.txt")).unwrap(), b"hello");
}

#[tokio::test]
async fn test_write_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), b"a much longer original").unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();

    store.write("a.txt", b"short").await.unwrap();

    assert_eq!(store.read("a.txt").await.unwrap(), b"short");
}

#[tokio::test]
async fn test_vanished_file_is_dropped_from_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("gone.txt"), b"x").unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();

    std::fs::remove_file(dir.path().join("gone.txt")).unwrap();

    assert!(matches!(
        store.read("gone.txt").await,
        Err(StoreError::NotFound(_))
    ));
    assert!(!store.contains("gone.txt").await);
}

#[tokio::test]
async fn test_invalid_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();

    assert!(matches!(
        store.write("..", b"x").await,
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.write("", b"x").await,
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.read(".").await,
        Err(StoreError::InvalidName(_))
    ));
}

#[tokio::test]
async fn test_write_failure_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();
    std::fs::create_dir(dir.path().join("taken")).unwrap();

    // A directory with that name already exists
    let err = store.write("taken", b"x").await.unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert!(!store.contains("taken").await);
}
