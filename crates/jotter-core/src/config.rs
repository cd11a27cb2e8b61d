//! Startup configuration, loaded once from the environment.
//!
//! The store path is the single required variable; everything else has a
//! default. A missing path is a fatal startup condition, not a per-request
//! error.

use crate::{NotesError, NotesResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Required: directory for the document store, or `:memory:`
pub const DB_PATH_ENV: &str = "JOTTER_DB_PATH";

const HOST_ENV: &str = "JOTTER_HOST";
const PORT_ENV: &str = "JOTTER_PORT";
const NAMESPACE_ENV: &str = "JOTTER_DB_NAMESPACE";
const DATABASE_ENV: &str = "JOTTER_DB_NAME";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_NAMESPACE: &str = "jotter";
const DEFAULT_DATABASE: &str = "notes";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub host: String,
    pub port: u16,
}

/// Document store connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Storage directory, or `:memory:` for the in-memory engine
    pub path: String,
    pub namespace: String,
    pub database: String,
}

impl StoreConfig {
    /// In-memory store configuration, used by tests and local development.
    pub fn memory() -> Self {
        Self {
            path: ":memory:".to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Fails fast with `NotesError::Config` when `JOTTER_DB_PATH` is absent
    /// or empty, or when `JOTTER_PORT` is not a valid port number.
    pub fn from_env() -> NotesResult<Self> {
        let path = non_empty_var(DB_PATH_ENV).ok_or_else(|| {
            NotesError::Config(format!(
                "{DB_PATH_ENV} must be set to the note store directory (or :memory:)"
            ))
        })?;

        let port = match non_empty_var(PORT_ENV) {
            Some(raw) => raw
                .parse()
                .map_err(|_| NotesError::Config(format!("{PORT_ENV} is not a valid port: {raw}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            store: StoreConfig {
                path,
                namespace: non_empty_var(NAMESPACE_ENV)
                    .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
                database: non_empty_var(DATABASE_ENV)
                    .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            },
            host: non_empty_var(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
