//! User entity - the single record type held by the directory.

use crate::TIMESTAMP_FORMAT;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user.
///
/// `id` is assigned by the store and never reused; `created_at` is fixed at
/// insert time. Only `name` and `email` change over the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// `created_at` rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn created_at_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}
