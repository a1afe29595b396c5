//! Route definitions for the `/analytics` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`.
///
/// ```text
/// POST   /page-view           -> log_page_view
/// POST   /form-interaction    -> log_form_interaction
/// GET    /dashboard           -> dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/page-view", post(analytics::log_page_view))
        .route("/form-interaction", post(analytics::log_form_interaction))
        .route("/dashboard", get(analytics::dashboard))
}
