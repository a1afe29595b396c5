pub mod analytics;
pub mod blog;
pub mod cars;
pub mod health;
pub mod leads;
pub mod status;
pub mod testimonials;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /status                          legacy status checks (GET, POST)
///
/// /leads                           list, create
/// /leads/stats                     aggregate counters
/// /leads/{id}                      update status (PUT ?status=)
///
/// /cars                            list active, create
/// /cars/{id}                       replace, soft-delete
///
/// /testimonials                    list active, create
/// /testimonials/{id}               replace
///
/// /blog/posts                      list published, create
/// /blog/posts/{key}                get by slug (GET), replace by id (PUT)
///
/// /analytics/page-view             log page view (POST)
/// /analytics/form-interaction      log form interaction (POST)
/// /analytics/dashboard             aggregate counters (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/status", status::router())
        .nest("/leads", leads::router())
        .nest("/cars", cars::router())
        .nest("/testimonials", testimonials::router())
        .nest("/blog", blog::router())
        .nest("/analytics", analytics::router())
}

/// Service banner at `/api` and `/api/`.
pub fn banner_router() -> Router<AppState> {
    Router::new()
        .route("/api", get(handlers::status::banner))
        .route("/api/", get(handlers::status::banner))
}
