//! Client side of the notes application: a thin JSON API client and the
//! UI state machine that drives it, kept separate from any rendering so
//! the loading/ready/error transitions are testable on their own.

pub mod api;
pub mod app;

pub use api::{ApiClient, ClientError};
pub use app::{App, Phase};
