use ud_core::User;
use ud_db::{UserRepository, initialize_schema};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::common::new_user;

/// Creates an in-memory SQLite pool with the users table in place
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection, or each one sees its own database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    initialize_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}

/// Inserts `(name, email)` pairs in order and returns the stored users
pub async fn insert_users(pool: &SqlitePool, users: &[(&str, &str)]) -> Vec<User> {
    let mut created = Vec::with_capacity(users.len());
    for (name, email) in users {
        let user = UserRepository::create(pool, &new_user(name, email))
            .await
            .expect("Failed to insert test user");
        created.push(user);
    }
    created
}
