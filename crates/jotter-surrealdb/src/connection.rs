//! Process-wide shared store connection.
//!
//! The connection is established lazily on first use and cached for the
//! lifetime of the process. Concurrent first callers converge on the same
//! connect attempt rather than racing to open duplicate connections; the
//! `OnceCell` serializes initialization. A failed attempt is not cached,
//! so a later caller will try again.

use crate::NoteStore;
use jotter_core::{NotesResult, StoreConfig};
use tokio::sync::OnceCell;

static STORE: OnceCell<NoteStore> = OnceCell::const_new();

/// Return the shared store handle, connecting on first call.
///
/// The configuration is only consulted by whichever caller actually
/// performs the connect; once the connection is established, later calls
/// return the cached handle immediately.
pub async fn get_connection(config: &StoreConfig) -> NotesResult<&'static NoteStore> {
    STORE
        .get_or_try_init(|| async {
            tracing::info!(path = %config.path, "connecting to note store");
            NoteStore::new(config.clone()).await
        })
        .await
}
