//! CRUD behavior of the note store against an isolated in-memory engine.

use jotter_core::NotesError;
use jotter_surrealdb::NoteStore;
use std::time::Duration;

#[tokio::test]
async fn create_then_list_includes_the_note() {
    let store = NoteStore::new_isolated_memory().await.unwrap();

    let created = store.create_note("Groceries", "milk, eggs").await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "Groceries");
    assert_eq!(created.content, "milk, eggs");
    assert_eq!(created.created_at, created.updated_at);

    let notes = store.list_notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0], created);
}

#[tokio::test]
async fn update_replaces_fields_and_refreshes_updated_at() {
    let store = NoteStore::new_isolated_memory().await.unwrap();
    let created = store.create_note("Groceries", "milk, eggs").await.unwrap();

    // Make sure the clock moves between create and update.
    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = store
        .update_note(&created.id, "Groceries", "milk, eggs, bread")
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "milk, eggs, bread");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > updated.created_at);

    let fetched = store.get_note(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let store = NoteStore::new_isolated_memory().await.unwrap();

    let err = store
        .update_note("nosuchnote", "title", "content")
        .await
        .unwrap_err();
    assert!(matches!(err, NotesError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_the_note_for_good() {
    let store = NoteStore::new_isolated_memory().await.unwrap();
    let created = store.create_note("Temp", "gone soon").await.unwrap();

    store.delete_note(&created.id).await.unwrap();

    let notes = store.list_notes().await.unwrap();
    assert!(notes.iter().all(|n| n.id != created.id));
    assert!(store.get_note(&created.id).await.unwrap().is_none());

    // The id is dead: both delete and update now report not found.
    assert!(matches!(
        store.delete_note(&created.id).await.unwrap_err(),
        NotesError::NotFound(_)
    ));
    assert!(matches!(
        store.update_note(&created.id, "t", "c").await.unwrap_err(),
        NotesError::NotFound(_)
    ));
}

#[tokio::test]
async fn list_returns_newest_first() {
    let store = NoteStore::new_isolated_memory().await.unwrap();

    for title in ["A", "B", "C"] {
        store.create_note(title, "content").await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let notes = store.list_notes().await.unwrap();
    let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "B", "A"]);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let store = NoteStore::new_isolated_memory().await.unwrap();

    let handles: Vec<_> = (0..5)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create_note(&format!("note {i}"), &format!("content {i}"))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().id);
    }

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());

    let notes = store.list_notes().await.unwrap();
    assert_eq!(notes.len(), 5);
}

#[tokio::test]
async fn whitespace_only_fields_are_stored_as_given() {
    // Validation is the API's concern; the store accepts what it is handed.
    let store = NoteStore::new_isolated_memory().await.unwrap();
    let note = store.create_note("   ", "\n").await.unwrap();
    assert_eq!(note.title, "   ");
    assert_eq!(note.content, "\n");
}

#[tokio::test]
async fn file_backed_store_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let config = jotter_core::StoreConfig {
        path: dir.path().join("notes.db").to_string_lossy().into_owned(),
        ..jotter_core::StoreConfig::memory()
    };

    let store = NoteStore::new(config).await.unwrap();
    let id = store.create_note("Kept", "still here").await.unwrap().id;
    let fetched = store.get_note(&id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Kept");
}
