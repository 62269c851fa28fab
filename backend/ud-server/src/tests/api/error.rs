use crate::ApiError;

use ud_core::{CoreError, NewUser};
use ud_db::UserRepository;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_error_message() {
    let error = ApiError::NotFound {
        message: "User 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "User 7 not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_error_message() {
    let error = ApiError::Validation {
        message: "Invalid email format".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "Invalid email format" }));
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Database operation failed");
}

#[test]
fn test_core_validation_error_converts_to_validation() {
    let core = CoreError::validation("Name and email are required", None);

    let api_error: ApiError = core.into();

    assert_that!(api_error.status(), eq(StatusCode::BAD_REQUEST));
    match api_error {
        ApiError::Validation { message, .. } => {
            assert_that!(message.as_str(), eq("Name and email are required"));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_sqlx_error_converts_to_internal_without_details() {
    let api_error: ApiError = sqlx::Error::PoolTimedOut.into();

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_that!(message.as_str(), eq("Database operation failed"));
        }
        other => panic!("Expected Internal error, got {:?}", other),
    }
}

#[test]
fn test_non_unique_db_error_converts_to_internal() {
    let db_error = ud_db::DbError::from(sqlx::Error::RowNotFound);

    let api_error: ApiError = db_error.into();

    assert_that!(api_error.status(), eq(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn test_email_exists_is_validation_on_email_field() {
    match ApiError::email_exists() {
        ApiError::Validation { message, field, .. } => {
            assert_that!(message.as_str(), eq("Email already exists"));
            assert_that!(field, some(eq("email")));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_store_unique_violation_converts_to_email_exists() {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ud_db::initialize_schema(&pool).await.unwrap();
    let new_user = NewUser {
        name: "John".to_string(),
        email: "john@example.com".to_string(),
    };
    UserRepository::create(&pool, &new_user).await.unwrap();

    // Skips the pre-check so only the UNIQUE constraint stands in the way
    let db_error = UserRepository::create(&pool, &new_user).await.unwrap_err();
    let api_error = ApiError::from(db_error);

    let (status, json) = body_json(api_error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "Email already exists" }));
}
