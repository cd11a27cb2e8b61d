//! The UI state machine.
//!
//! States: `Loading` (initial and during every list refetch), `Ready` (list
//! displayed), `Error` (last operation failed; any previously fetched list
//! stays visible next to the error banner). The server is the sole source
//! of truth: every successful mutation triggers a full refetch rather than
//! patching local state.

use crate::{ApiClient, ClientError};
use jotter_core::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Error,
}

#[derive(Debug)]
pub struct App {
    phase: Phase,
    notes: Vec<Note>,
    error: Option<String>,
    /// Id of the note loaded into the form, when editing.
    editing: Option<String>,
    pub draft_title: String,
    pub draft_content: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            notes: Vec::new(),
            error: None,
            editing: None,
            draft_title: String::new(),
            draft_content: String::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Refetch the full list. On failure the previous list is kept.
    pub async fn refresh(&mut self, api: &ApiClient) {
        self.phase = Phase::Loading;
        match api.list_notes().await {
            Ok(notes) => {
                self.notes = notes;
                self.error = None;
                self.phase = Phase::Ready;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Send the draft: a create normally, an update when a note is selected
    /// for editing. Success clears the form and edit target, then refetches;
    /// failure leaves the draft intact for correction.
    pub async fn submit(&mut self, api: &ApiClient) {
        let result = match &self.editing {
            Some(id) => api.update_note(id, &self.draft_title, &self.draft_content).await,
            None => api.create_note(&self.draft_title, &self.draft_content).await,
        };

        match result {
            Ok(_) => {
                self.clear_form();
                self.refresh(api).await;
            }
            Err(e) => self.fail(e),
        }
    }

    /// Load a note into the form; the next submit becomes an update.
    pub fn select_for_edit(&mut self, note: &Note) {
        self.editing = Some(note.id.clone());
        self.draft_title = note.title.clone();
        self.draft_content = note.content.clone();
    }

    /// Drop the edit target and form contents without contacting the server.
    pub fn cancel_edit(&mut self) {
        self.clear_form();
    }

    /// Delete a note. The confirmation prompt is the caller's job, before
    /// this is invoked. Failure leaves the displayed list untouched.
    pub async fn delete(&mut self, api: &ApiClient, id: &str) {
        match api.delete_note(id).await {
            Ok(()) => self.refresh(api).await,
            Err(e) => self.fail(e),
        }
    }

    fn clear_form(&mut self) {
        self.editing = None;
        self.draft_title.clear();
        self.draft_content.clear();
    }

    fn fail(&mut self, error: ClientError) {
        self.error = Some(error.to_string());
        self.phase = Phase::Error;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
