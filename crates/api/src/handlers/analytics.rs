//! Handlers for the `/analytics` resource.
//!
//! Events are fire-and-forget: fields are stored as sent, and the only
//! failure mode is the store refusing the write.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::Json;
use consorcio_db::models::analytics::{DashboardSummary, FormInteractionParams, PageViewParams};
use consorcio_db::repositories::AnalyticsRepo;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/analytics/page-view?page=&user_agent=&ip=
pub async fn log_page_view(
    State(state): State<AppState>,
    Query(params): Query<PageViewParams>,
) -> AppResult<Json<MessageResponse>> {
    let view = AnalyticsRepo::log_page_view(&state.pool, &params)
        .await
        .map_err(|e| AppError::write_failed("Page view", e))?;
    tracing::debug!(event_id = %view.id, page = %view.page, "Page view logged");
    Ok(Json(MessageResponse::new("Page view logged")))
}

/// POST /api/analytics/form-interaction?form_type=&action=
///
/// The optional request body is a JSON object stored as the event details.
pub async fn log_form_interaction(
    State(state): State<AppState>,
    Query(params): Query<FormInteractionParams>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    let details = parse_details(&body)?;
    let interaction = AnalyticsRepo::log_form_interaction(&state.pool, &params, &details)
        .await
        .map_err(|e| AppError::write_failed("Form interaction", e))?;
    tracing::debug!(
        event_id = %interaction.id,
        form_type = %interaction.form_type,
        action = %interaction.action,
        "Form interaction logged"
    );
    Ok(Json(MessageResponse::new("Form interaction logged")))
}

/// GET /api/analytics/dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = AnalyticsRepo::dashboard(&state.pool).await?;
    Ok(Json(summary))
}

/// Parse the form-interaction body. Empty means `{}`; anything else must be
/// a JSON object.
fn parse_details(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Err(AppError::BadRequest(
            "details must be a JSON object".to_string(),
        )),
        Err(e) => Err(AppError::BadRequest(format!("Invalid details JSON: {e}"))),
    }
}
