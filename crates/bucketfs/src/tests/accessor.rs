use super::fs_with;
use crate::{MemoryStore, StoreError};

#[tokio::test]
async fn single_object_present() {
    let mut store = MemoryStore::new();
    store.insert("docs/readme.md", "hello");
    let fs = fs_with(store);

    let object = fs.get_object("docs/readme.md").await.unwrap();

    assert_eq!(object.path, "docs/readme.md");
    assert!(object.meta.is_empty());
    assert!(object.contains.is_empty());
    assert!(!object.is_dir());
    assert_eq!(object.url, "https://store.example.com/pond/docs/readme.md");
}

#[tokio::test]
async fn single_object_absent_propagates_not_found() {
    let fs = fs_with(MemoryStore::new());

    let err = fs.get_object("missing.txt").await.unwrap_err();

    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn directory_url_keeps_trailing_slash() {
    let mut store = MemoryStore::new();
    store.insert("docs/a", "");
    let fs = fs_with(store);

    let object = fs.get_object("docs/").await.unwrap();

    assert!(object.is_dir());
    assert_eq!(object.url, "https://store.example.com/pond/docs/");
}

#[tokio::test]
async fn repeated_resolution_is_idempotent() {
    let mut store = MemoryStore::new();
    store
        .insert("docs/a", "one")
        .insert("docs/b/", "")
        .insert("docs/meta.yaml", "owner: data-team\n");
    let fs = fs_with(store);

    let first = fs.get_object("docs/").await.unwrap();
    let second = fs.get_object("docs/").await.unwrap();

    assert_eq!(first, second);
}
