//! User repository: parameterized queries against the `users` table.
//!
//! Every method takes a generic executor so callers can run a pre-check and
//! the following write on the same transaction.

use crate::{DbError, Result as DbErrorResult, UserSort};

use ud_core::{NewUser, User};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: i64,
}

impl UserRow {
    #[track_caller]
    fn into_user(self) -> DbErrorResult<User> {
        let created_at =
            DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| DbError::InvalidRow {
                message: format!(
                    "Invalid timestamp in users.created_at for id {}: {}",
                    self.id, self.created_at
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at,
        })
    }
}

pub struct UserRepository;

impl UserRepository {
    /// Insert a validated user. The store assigns the id; `created_at` is
    /// the current UTC time truncated to whole seconds.
    pub async fn create<'e, E>(executor: E, new_user: &NewUser) -> DbErrorResult<User>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (name, email, created_at)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(now)
        .execute(executor)
        .await?;

        UserRow {
            id: result.last_insert_rowid(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            created_at: now,
        }
        .into_user()
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// All users in the requested order. Ties break on id.
    pub async fn find_all<'e, E>(executor: E, sort: UserSort) -> DbErrorResult<Vec<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT id, name, email, created_at FROM users ORDER BY {}",
            sort.order_by_clause()
        );

        let rows = sqlx::query_as::<_, UserRow>(&sql)
            .fetch_all(executor)
            .await?;

        rows.into_iter()
            .map(UserRow::into_user)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Users whose name contains `query`, ignoring ASCII case.
    ///
    /// `%` and `_` in the query match literally. Results come back in id
    /// order. An empty query matches everything; callers decide whether
    /// that is wanted.
    pub async fn search_by_name<'e, E>(executor: E, query: &str) -> DbErrorResult<Vec<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let pattern = format!("%{}%", escape_like(query));

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, created_at
                FROM users
                WHERE name LIKE ? ESCAPE '\'
                ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(UserRow::into_user)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Whether another user already holds `email`.
    ///
    /// `exclude_id` leaves one record out of the check, so a user can keep
    /// its own address on update.
    pub async fn email_exists<'e, E>(
        executor: E,
        email: &str,
        exclude_id: Option<i64>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let found = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT id
                FROM users
                WHERE email = ? AND (? IS NULL OR id != ?)
                LIMIT 1
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .bind(exclude_id)
        .fetch_optional(executor)
        .await?;

        Ok(found.is_some())
    }

    /// Overwrite name and email. Returns false when no row has `id`.
    pub async fn update<'e, E>(executor: E, id: i64, new_user: &NewUser) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = ?, email = ?
                WHERE id = ?
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false when no row has `id`.
    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
