//! The persisted note entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single note as stored and as returned on the wire.
///
/// `id` is assigned by the store at creation and never changes. `created_at`
/// is set once; `updated_at` is refreshed on every successful update, so
/// `created_at <= updated_at` always holds. Timestamps serialize as ISO-8601
/// strings and field names are camelCase on the wire (`createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
