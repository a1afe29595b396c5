//! Handlers for the `/cars` resource.

use axum::extract::{Path, State};
use axum::Json;
use consorcio_db::models::car::{Car, SaveCar};
use consorcio_db::repositories::CarRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/cars
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Car>>> {
    let cars = CarRepo::list_active(&state.pool).await?;
    Ok(Json(cars))
}

/// POST /api/cars
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<SaveCar>,
) -> AppResult<Json<Car>> {
    let car = CarRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::write_failed("Car", e))?;
    tracing::info!(car_id = %car.id, model = %car.model, "Car created");
    Ok(Json(car))
}

/// PUT /api/cars/{id}
pub async fn replace(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<SaveCar>,
) -> AppResult<Json<MessageResponse>> {
    let replaced = CarRepo::replace(&state.pool, &id, &input)
        .await
        .map_err(|e| AppError::update_failed("Car", e))?;
    if !replaced {
        return Err(AppError::not_found("Car", id));
    }
    tracing::info!(car_id = %id, "Car updated");
    Ok(Json(MessageResponse::new("Car updated successfully")))
}

/// DELETE /api/cars/{id}
///
/// Soft delete: the row stays, `is_active` goes false.
pub async fn soft_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let deactivated = CarRepo::soft_delete(&state.pool, &id)
        .await
        .map_err(|e| AppError::update_failed("Car", e))?;
    if !deactivated {
        return Err(AppError::not_found("Car", id));
    }
    tracing::info!(car_id = %id, "Car deactivated");
    Ok(Json(MessageResponse::new("Car deleted successfully")))
}
