use ud_core::FieldLimits;

use sqlx::SqlitePool;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub validation: FieldLimits,
}

impl AppState {
    pub fn new(pool: SqlitePool, validation: FieldLimits) -> Self {
        Self { pool, validation }
    }
}
