use super::*;

#[test]
fn memory_store_reads_back_writes() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("v".to_owned()));
    store.set("k", "w").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("w".to_owned()));
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.set("shared", "1").unwrap();
    assert_eq!(other.raw("shared"), Some("1".to_owned()));
}

#[test]
fn read_only_store_rejects_writes_but_serves_seeded_reads() {
    let store = MemoryStore::read_only();
    store.insert("k", "seed");
    assert!(matches!(store.set("k", "v"), Err(StorageError::Write(_))));
    assert_eq!(store.get("k").unwrap(), Some("seed".to_owned()));
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StorageError::Malformed("x".into()).to_string(), "malformed stored value: x");
}
