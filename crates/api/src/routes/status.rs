//! Route definitions for the legacy `/status` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// Routes mounted at `/status`.
///
/// ```text
/// GET    /    -> list_status_checks
/// POST   /    -> create_status_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(status::list_status_checks).post(status::create_status_check),
    )
}
