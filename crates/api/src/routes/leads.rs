//! Route definitions for the `/leads` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Routes mounted at `/leads`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /stats     -> stats
/// PUT    /{id}      -> update_status (?status=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leads::list).post(leads::create))
        .route("/stats", get(leads::stats))
        .route("/{id}", put(leads::update_status))
}
