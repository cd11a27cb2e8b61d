//! Core domain types for jotter: the `Note` entity, the error taxonomy
//! shared across the API and store layers, and startup configuration.

pub mod config;
pub mod error;
pub mod note;

pub use config::{AppConfig, StoreConfig, DB_PATH_ENV};
pub use error::{NotesError, NotesResult};
pub use note::Note;
