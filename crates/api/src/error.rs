use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use consorcio_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `consorcio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map an error from an insert into the generic "Failed to create" 400.
    ///
    /// Only errors the database itself raised count as a rejected write;
    /// pool and connection failures stay [`AppError::Database`] and become 500s.
    pub fn write_failed(entity: &'static str, err: sqlx::Error) -> Self {
        Self::rejected_write(CoreError::WriteFailed { entity }, err)
    }

    /// Same as [`AppError::write_failed`] for updates, replaces and soft deletes.
    pub fn update_failed(entity: &'static str, err: sqlx::Error) -> Self {
        Self::rejected_write(CoreError::UpdateFailed { entity }, err)
    }

    fn rejected_write(core: CoreError, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                tracing::warn!(
                    error = %db_err,
                    code = ?db_err.code(),
                    constraint = ?db_err.constraint(),
                    "Write rejected by database: {core}"
                );
                AppError::Core(core)
            }
            other => AppError::Database(other),
        }
    }

    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        AppError::Core(CoreError::NotFound {
            entity,
            id: id.into(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.client_message())
                }
                CoreError::WriteFailed { .. } | CoreError::UpdateFailed { .. } => {
                    (StatusCode::BAD_REQUEST, "WRITE_FAILED", core.client_message())
                }
            },

            // --- Database errors ---
            // Rejected writes were already turned into `CoreError` by the
            // handlers; what reaches here is connectivity or an unexpected
            // failure on a read.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
