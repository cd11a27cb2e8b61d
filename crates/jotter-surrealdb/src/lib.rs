//! SurrealDB-backed persistence for jotter notes.
//!
//! [`NoteStore`] wraps the embedded SurrealDB engine (in-memory or RocksDB)
//! and exposes the point operations the API service needs. The [`connection`]
//! module provides the process-wide shared connection with deduplicated
//! lazy initialization.

pub mod connection;
pub mod store;

pub use connection::get_connection;
pub use store::NoteStore;
