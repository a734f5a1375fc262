use jotterapp::model::{DocumentPatch, NewDocument};
use jotterapp::store::backend::StorageBackend;
use jotterapp::store::fs::FileStore;
use jotterapp::store::fs_backend::{FsBackend, LOCK_FILE, TABLE_FILE};
use jotterapp::store::DocumentStore;
use std::fs;
use tempfile::TempDir;

fn new_doc(title: &str) -> NewDocument {
    NewDocument {
        title: title.to_string(),
        owner_id: "alice".to_string(),
        parent_id: None,
    }
}

#[test]
fn test_missing_table_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("not-yet"));
    let table = backend.load_table().unwrap();
    assert!(table.documents.is_empty());
    assert_eq!(table.next_sequence, 0);
}

#[test]
fn test_documents_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("data");

    let (first, second) = {
        let mut store = FileStore::new(root.clone());
        let first = store.insert(new_doc("First")).unwrap();
        let second = store.insert(new_doc("Second")).unwrap();
        store
            .patch(&first.id, &DocumentPatch::archived(true))
            .unwrap();
        (first, second)
    };

    let mut reopened = FileStore::new(root.clone());
    let loaded = reopened.get(&first.id).unwrap().unwrap();
    assert_eq!(loaded.title, "First");
    assert!(loaded.is_archived);

    // Sequence numbers keep increasing across reopen.
    let third = reopened.insert(new_doc("Third")).unwrap();
    assert!(third.sequence > second.sequence);
    assert_eq!(reopened.by_owner("alice").unwrap().len(), 3);
    assert_eq!(reopened.root(), root.as_path());
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());
    let doc = store.insert(new_doc("Atomic")).unwrap();
    store.delete(&doc.id).unwrap();

    assert!(dir.path().join(TABLE_FILE).exists());
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_table_is_camel_case_json() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());
    store.insert(new_doc("Shape")).unwrap();

    let raw = fs::read_to_string(dir.path().join(TABLE_FILE)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["nextSequence"], 1);
    let doc = json["documents"].as_object().unwrap().values().next().unwrap();
    assert_eq!(doc["ownerId"], "alice");
    assert_eq!(doc["isArchived"], false);
}

#[test]
fn test_corrupt_table_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(TABLE_FILE), "{ not json").unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    assert!(store.by_owner("alice").is_err());
}

#[test]
fn test_concurrent_writers_keep_every_insert() {
    const WRITERS: usize = 4;
    const PER_WRITER: usize = 25;
    let dir = TempDir::new().unwrap();

    let handles: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let root = dir.path().to_path_buf();
            std::thread::spawn(move || {
                // Each writer opens its own store, like separate processes would.
                let mut store = FileStore::new(root);
                for i in 0..PER_WRITER {
                    store
                        .insert(new_doc(&format!("Writer {} doc {}", writer, i)))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let store = FileStore::new(dir.path().to_path_buf());
    let docs = store.by_owner("alice").unwrap();
    assert_eq!(docs.len(), WRITERS * PER_WRITER);

    // Every insert got its own sequence number.
    let mut sequences: Vec<u64> = docs.iter().map(|d| d.sequence).collect();
    sequences.dedup();
    assert_eq!(sequences.len(), WRITERS * PER_WRITER);
    assert!(dir.path().join(LOCK_FILE).exists());
}
