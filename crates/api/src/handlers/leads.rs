//! Handlers for the `/leads` resource.
//!
//! Leads come from the public landing page forms. Status and source are free
//! text; nothing here checks them against a fixed list, and `model` is not
//! checked against the car catalog.

use axum::extract::{Path, Query, State};
use axum::Json;
use consorcio_db::models::lead::{CreateLead, Lead, LeadStats, LeadStatusParams};
use consorcio_db::repositories::LeadRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/leads
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLead>,
) -> AppResult<Json<Lead>> {
    let lead = LeadRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::write_failed("Lead", e))?;

    tracing::info!(
        lead_id = %lead.id,
        model = %lead.model,
        source = %lead.source,
        "Lead created"
    );

    Ok(Json(lead))
}

/// GET /api/leads
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Lead>>> {
    let leads = LeadRepo::list(&state.pool).await?;
    Ok(Json(leads))
}

/// GET /api/leads/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<LeadStats>> {
    let stats = LeadRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}

/// PUT /api/leads/{id}?status=...
///
/// 404 when nothing changed: unknown id, or the lead already had that status.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LeadStatusParams>,
) -> AppResult<Json<MessageResponse>> {
    let updated = LeadRepo::update_status(&state.pool, &id, &params.status)
        .await
        .map_err(|e| AppError::update_failed("Lead", e))?;
    if !updated {
        return Err(AppError::not_found("Lead", id));
    }

    tracing::info!(lead_id = %id, status = %params.status, "Lead status updated");

    Ok(Json(MessageResponse::new("Lead updated successfully")))
}
