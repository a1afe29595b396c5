//! Route definitions for the `/cars` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::cars;
use crate::state::AppState;

/// Routes mounted at `/cars`.
///
/// ```text
/// GET    /        -> list_active
/// POST   /        -> create
/// PUT    /{id}    -> replace
/// DELETE /{id}    -> soft_delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cars::list_active).post(cars::create))
        .route("/{id}", put(cars::replace).delete(cars::soft_delete))
}
