use folio_storage::{FileStore, KeyValueStore};

#[tokio::test]
async fn missing_slot_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    assert_eq!(store.get("documents").await.unwrap(), None);
}

#[tokio::test]
async fn set_then_get_returns_latest_value() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested"));

    store.set("documents", "[1]".to_string()).await.unwrap();
    store.set("documents", "[1,2]".to_string()).await.unwrap();

    assert_eq!(store.get("documents").await.unwrap().as_deref(), Some("[1,2]"));
    assert!(store.slot_path("documents").exists());
    assert!(!store.slot_path("documents").with_extension("json.tmp").exists());
}

#[tokio::test]
async fn slots_survive_a_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    FileStore::new(dir.path())
        .set("documents", "[]".to_string())
        .await
        .unwrap();

    let reopened = FileStore::new(dir.path());
    assert_eq!(reopened.get("documents").await.unwrap().as_deref(), Some("[]"));
}
