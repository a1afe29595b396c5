//! Route definitions for the `/blog` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Routes mounted at `/blog`.
///
/// The single `{key}` segment is a slug for reads and an id for replaces;
/// the router cannot hold two differently-named captures at one position.
///
/// ```text
/// GET    /posts          -> list_published
/// POST   /posts          -> create
/// GET    /posts/{key}    -> get_by_slug
/// PUT    /posts/{key}    -> replace
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(blog::list_published).post(blog::create))
        .route("/posts/{key}", get(blog::get_by_slug).put(blog::replace))
}
