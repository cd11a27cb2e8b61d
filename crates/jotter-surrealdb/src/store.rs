//! Note store over the embedded SurrealDB engine.
//!
//! ## Supported backends
//!
//! - **Memory (Mem)**: in-memory storage for development and testing
//! - **File (RocksDB)**: persistent file-based storage
//!
//! All operations are single-document point reads and writes on the `note`
//! table; consistency relies on SurrealDB's per-document atomicity. Nothing
//! is retried.

use chrono::Utc;
use jotter_core::{Note, NotesError, NotesResult, StoreConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use surrealdb::engine::local::Db;
use surrealdb::sql::{Datetime, Thing};
use surrealdb::Surreal;

const NOTE_TABLE: &str = "note";

/// Handle to the notes document store.
///
/// Uses Arc internally so cloning is cheap and never opens a second
/// database connection. This matters for RocksDB file databases, which
/// refuse a second open of the same path within one process.
#[derive(Clone)]
pub struct NoteStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    db: Surreal<Db>,
    config: StoreConfig,
}

impl std::fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteStore")
            .field("config", &self.inner.config)
            .finish()
    }
}

/// Fields written at creation; the store assigns the record id.
#[derive(Debug, Serialize)]
struct NoteDocument {
    title: String,
    content: String,
    created_at: Datetime,
    updated_at: Datetime,
}

/// Fields replaced by an update. `created_at` and the id are never touched.
#[derive(Debug, Serialize)]
struct NotePatch {
    title: String,
    content: String,
    updated_at: Datetime,
}

/// A note as it comes back from the database.
#[derive(Debug, Deserialize)]
struct NoteRecord {
    id: Thing,
    title: String,
    content: String,
    created_at: Datetime,
    updated_at: Datetime,
}

impl From<NoteRecord> for Note {
    fn from(record: NoteRecord) -> Self {
        Note {
            id: record.id.id.to_raw(),
            title: record.title,
            content: record.content,
            created_at: record.created_at.0,
            updated_at: record.updated_at.0,
        }
    }
}

impl NoteStore {
    /// Open a store with the given configuration.
    ///
    /// A path of `:memory:` (or an empty path) selects the in-memory
    /// engine; anything else is treated as a RocksDB storage directory.
    pub async fn new(config: StoreConfig) -> NotesResult<Self> {
        use surrealdb::engine::local::{Mem, RocksDb};

        let db = if config.path.is_empty() || config.path == ":memory:" {
            Surreal::new::<Mem>(()).await.map_err(|e| {
                NotesError::Store(format!("Failed to create in-memory database: {e}"))
            })?
        } else {
            Surreal::new::<RocksDb>(config.path.as_str())
                .await
                .map_err(|e| {
                    NotesError::Store(format!(
                        "Failed to open database at {}: {e}",
                        config.path
                    ))
                })?
        };

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await
            .map_err(|e| {
                NotesError::Store(format!(
                    "Failed to use namespace '{}' and database '{}': {e}",
                    config.namespace, config.database
                ))
            })?;

        tracing::debug!(
            path = %config.path,
            namespace = %config.namespace,
            database = %config.database,
            "opened note store"
        );

        Ok(Self {
            inner: Arc::new(StoreInner { db, config }),
        })
    }

    /// Open an in-memory store with default namespace and database.
    pub async fn new_memory() -> NotesResult<Self> {
        Self::new(StoreConfig::memory()).await
    }

    /// Open an isolated in-memory store for tests.
    ///
    /// Each call gets a unique namespace, so parallel tests never see each
    /// other's notes.
    pub async fn new_isolated_memory() -> NotesResult<Self> {
        let config = StoreConfig {
            namespace: format!("test_{}", uuid::Uuid::new_v4().simple()),
            ..StoreConfig::memory()
        };
        Self::new(config).await
    }

    /// All notes, newest first.
    pub async fn list_notes(&self) -> NotesResult<Vec<Note>> {
        let mut response = self
            .inner
            .db
            .query("SELECT * FROM note ORDER BY created_at DESC")
            .await
            .map_err(store_err)?;

        let records: Vec<NoteRecord> = response.take(0).map_err(store_err)?;
        Ok(records.into_iter().map(Note::from).collect())
    }

    /// Create a note. The store assigns the id and both timestamps; at
    /// creation `created_at == updated_at`.
    pub async fn create_note(&self, title: &str, content: &str) -> NotesResult<Note> {
        let now = Utc::now();
        let record: Option<NoteRecord> = self
            .inner
            .db
            .create(NOTE_TABLE)
            .content(NoteDocument {
                title: title.to_string(),
                content: content.to_string(),
                created_at: now.into(),
                updated_at: now.into(),
            })
            .await
            .map_err(store_err)?;

        record
            .map(Note::from)
            .ok_or_else(|| NotesError::Store("create returned no record".to_string()))
    }

    /// Replace a note's title and content and refresh `updated_at`.
    ///
    /// Returns `NotesError::NotFound` when no note has the given id.
    pub async fn update_note(&self, id: &str, title: &str, content: &str) -> NotesResult<Note> {
        let record: Option<NoteRecord> = self
            .inner
            .db
            .update((NOTE_TABLE, id))
            .merge(NotePatch {
                title: title.to_string(),
                content: content.to_string(),
                updated_at: Utc::now().into(),
            })
            .await
            .map_err(store_err)?;

        record
            .map(Note::from)
            .ok_or_else(|| NotesError::NotFound("Note not found".to_string()))
    }

    /// Permanently remove a note.
    ///
    /// Returns `NotesError::NotFound` when no note has the given id.
    pub async fn delete_note(&self, id: &str) -> NotesResult<()> {
        let record: Option<NoteRecord> = self
            .inner
            .db
            .delete((NOTE_TABLE, id))
            .await
            .map_err(store_err)?;

        record
            .map(|_| ())
            .ok_or_else(|| NotesError::NotFound("Note not found".to_string()))
    }

    /// Fetch a single note by id, or `None` when it does not exist.
    pub async fn get_note(&self, id: &str) -> NotesResult<Option<Note>> {
        let record: Option<NoteRecord> = self
            .inner
            .db
            .select((NOTE_TABLE, id))
            .await
            .map_err(store_err)?;

        Ok(record.map(Note::from))
    }
}

fn store_err(e: surrealdb::Error) -> NotesError {
    NotesError::Store(e.to_string())
}
