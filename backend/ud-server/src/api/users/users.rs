//! User REST API handlers

use crate::{ApiError, ApiResult, AppState, ListUsersQuery, SearchUsersQuery, UserDto};

use ud_core::{User, UserInput};
use ud_db::UserRepository;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

/// GET /api/users?sort_by=&sort_order=
///
/// List every user, ordered by name or email
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let sort = query.sort();
    let users = UserRepository::find_all(&state.pool, sort).await?;

    log::debug!("Listed {} users ordered by {}", users.len(), sort);

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /api/search?query=
///
/// Case-insensitive substring search on names. A blank query matches nothing.
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchUsersQuery>,
) -> ApiResult<Json<Vec<UserDto>>> {
    let term = query.query.trim();
    if term.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let users = UserRepository::search_by_name(&state.pool, term).await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let Json(input) = payload?;

    // 1. Trim and validate fields
    let new_user = input.validate(&state.validation)?;

    // 2. Pre-check and insert on one transaction
    let mut tx = ud_db::begin_write(&state.pool).await?;
    if UserRepository::email_exists(&mut *tx, &new_user.email, None).await? {
        return Err(ApiError::email_exists());
    }
    let user = UserRepository::create(&mut *tx, &new_user).await?;
    tx.commit().await?;

    log::info!("Created user {} <{}>", user.id, user.email);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /api/users/{id}
///
/// Replace name and email. `created_at` is untouched.
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let Path(id) = path?;

    let mut tx = ud_db::begin_write(&state.pool).await?;

    // 1. Fetch existing user
    let existing = UserRepository::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(id))?;

    // 2. Trim and validate fields
    let Json(input) = payload?;
    let new_user = input.validate(&state.validation)?;

    // 3. Uniqueness, ignoring this user's own row
    if UserRepository::email_exists(&mut *tx, &new_user.email, Some(id)).await? {
        return Err(ApiError::email_exists());
    }

    // 4. Write
    if !UserRepository::update(&mut *tx, id, &new_user).await? {
        return Err(ApiError::user_not_found(id));
    }
    tx.commit().await?;

    log::info!("Updated user {} <{}>", id, new_user.email);

    let user = User {
        id,
        name: new_user.name,
        email: new_user.email,
        created_at: existing.created_at,
    };

    Ok(Json(user.into()))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;

    if !UserRepository::delete(&state.pool, id).await? {
        return Err(ApiError::user_not_found(id));
    }

    log::info!("Deleted user {}", id);

    Ok(StatusCode::NO_CONTENT)
}
