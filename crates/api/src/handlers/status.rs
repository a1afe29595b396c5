//! Service banner and legacy status-check handlers.

use axum::extract::State;
use axum::Json;
use consorcio_db::models::status_check::{CreateStatusCheck, StatusCheck};
use consorcio_db::repositories::StatusCheckRepo;

use crate::error::{AppError, AppResult};
use crate::response::BannerResponse;
use crate::state::AppState;

/// Version advertised by the banner. The public API contract is versioned
/// separately from the crate.
const API_VERSION: &str = "1.0.0";

/// GET /api/
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Volkswagen Consortium API - Running!",
        version: API_VERSION,
    })
}

/// POST /api/status
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<CreateStatusCheck>,
) -> AppResult<Json<StatusCheck>> {
    let check = StatusCheckRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::write_failed("Status check", e))?;
    Ok(Json(check))
}

/// GET /api/status
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StatusCheck>>> {
    let checks = StatusCheckRepo::list(&state.pool).await?;
    Ok(Json(checks))
}
