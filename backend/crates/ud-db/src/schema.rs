//! Idempotent schema bootstrap.
//!
//! There is no migration history: the single table is created if it does not
//! exist and left alone otherwise.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

const USERS_TABLE: &str = include_str!("../schema/users.sql");

pub async fn initialize_schema(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::query(USERS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| DbError::Schema {
            message: format!("Failed to create users table: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::debug!("Schema ready: users");

    Ok(())
}
