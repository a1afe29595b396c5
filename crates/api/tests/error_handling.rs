//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server or
//! database is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use consorcio_api::error::AppError;
use consorcio_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::not_found("Lead", "abc-123")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Lead not found");
}

#[tokio::test]
async fn write_failed_error_returns_400_with_generic_message() {
    let err = AppError::Core(CoreError::WriteFailed {
        entity: "Blog post",
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "WRITE_FAILED");
    assert_eq!(json["error"], "Failed to create blog post");
}

#[tokio::test]
async fn update_failed_error_returns_400_with_generic_message() {
    let err = AppError::Core(CoreError::UpdateFailed { entity: "Lead" });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "WRITE_FAILED");
    assert_eq!(json["error"], "Failed to update lead");
}

// ---------------------------------------------------------------------------
// HTTP-specific errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("details must be a JSON object".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "details must be a JSON object");
}

// ---------------------------------------------------------------------------
// Database errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pool_timeout_returns_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn write_failed_keeps_connectivity_errors_as_database_errors() {
    let err = AppError::write_failed("Car", sqlx::Error::PoolClosed);
    assert_matches!(err, AppError::Database(sqlx::Error::PoolClosed));

    let (status, _) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn update_failed_keeps_connectivity_errors_as_database_errors() {
    let err = AppError::update_failed("Testimonial", sqlx::Error::PoolTimedOut);
    assert_matches!(err, AppError::Database(sqlx::Error::PoolTimedOut));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}
