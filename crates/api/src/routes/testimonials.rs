//! Route definitions for the `/testimonials` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET    /        -> list_active
/// POST   /        -> create
/// PUT    /{id}    -> replace
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(testimonials::list_active).post(testimonials::create),
        )
        .route("/{id}", put(testimonials::replace))
}
