//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, State};
use axum::Json;
use consorcio_db::models::testimonial::{SaveTestimonial, Testimonial};
use consorcio_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/testimonials
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = TestimonialRepo::list_active(&state.pool).await?;
    Ok(Json(testimonials))
}

/// POST /api/testimonials
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SaveTestimonial>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = TestimonialRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::write_failed("Testimonial", e))?;
    tracing::info!(testimonial_id = %testimonial.id, "Testimonial created");
    Ok(Json(testimonial))
}

/// PUT /api/testimonials/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<SaveTestimonial>,
) -> AppResult<Json<MessageResponse>> {
    let replaced = TestimonialRepo::replace(&state.pool, &id, &input)
        .await
        .map_err(|e| AppError::update_failed("Testimonial", e))?;
    if !replaced {
        return Err(AppError::not_found("Testimonial", id));
    }
    Ok(Json(MessageResponse::new("Testimonial updated successfully")))
}
